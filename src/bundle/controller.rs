//! Bundle controller access

use tracing::{debug, info};

use crate::config::ClusterTarget;
use crate::context::Context;
use crate::domain::PackageBundleController;
use crate::error::{PackagesError, Result, bundle};
use crate::exec::{KubectlCommand, KubectlRunner};

/// Reads and updates the cluster's singleton bundle controller
pub struct ControllerClient<'a> {
    kubectl: &'a dyn KubectlRunner,
    target: &'a ClusterTarget,
    name: String,
}

impl<'a> ControllerClient<'a> {
    pub fn new(
        kubectl: &'a dyn KubectlRunner,
        target: &'a ClusterTarget,
        name: impl Into<String>,
    ) -> Self {
        Self {
            kubectl,
            target,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fetch the controller record
    pub fn get(&self, ctx: &Context) -> Result<PackageBundleController> {
        let command = KubectlCommand::new(["get", "packagebundlecontroller", self.name.as_str()])
            .output("json")
            .kubeconfig(self.target.kubeconfig())
            .namespace(self.target.namespace());

        let out = self.kubectl.run(ctx, &command).map_err(|e| match e {
            PackagesError::Cancelled => e,
            other => bundle::controller_lookup_failed(&self.name, other.to_string()),
        })?;

        serde_json::from_slice(&out)
            .map_err(|e| bundle::parse_failed("active package bundle controller", e.to_string()))
    }

    /// Identifier of the bundle the controller marks active
    pub fn active_bundle(&self, ctx: &Context) -> Result<String> {
        let controller = self.get(ctx)?;
        let active = controller.spec.active_bundle.trim();
        if active.is_empty() {
            return Err(PackagesError::MissingActiveBundle {
                name: self.name.clone(),
            });
        }
        debug!(controller = %self.name, bundle = active, "found active bundle");
        Ok(active.to_string())
    }

    /// Point the controller at `new_bundle` and apply it
    ///
    /// The rest of the controller spec is written back unchanged.
    pub fn upgrade_bundle(
        &self,
        ctx: &Context,
        controller: &PackageBundleController,
        new_bundle: &str,
    ) -> Result<String> {
        let new_bundle = new_bundle.trim();
        if new_bundle.is_empty() {
            return Err(bundle::version_required(&controller.metadata.name));
        }

        let mut updated = controller.clone();
        updated.spec.active_bundle = new_bundle.to_string();
        let manifest = serde_yaml::to_string(&updated)?;

        info!(
            controller = %updated.metadata.name,
            from = %controller.spec.active_bundle,
            to = new_bundle,
            "upgrading active package bundle"
        );
        let command = KubectlCommand::new(["apply", "-f", "-"])
            .kubeconfig(self.target.kubeconfig())
            .stdin(manifest);
        let out = self.kubectl.run(ctx, &command)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
