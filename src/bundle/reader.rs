//! Active bundle lookup

use tracing::debug;

use super::controller::ControllerClient;
use crate::config::ClusterTarget;
use crate::context::Context;
use crate::domain::PackageBundle;
use crate::error::{PackagesError, Result, bundle};
use crate::exec::{KubectlCommand, KubectlRunner};
use crate::registry::{BundleManager, RegistryRefProvider};
use crate::source::BundleSource;

/// Returns the single authoritative bundle for a bundle source
///
/// The cluster path reads the controller then the bundle it names. The
/// registry path resolves the base reference then asks the bundle manager for
/// the latest bundle. The two paths never touch each other's capabilities and
/// nothing is cached between calls.
pub struct BundleReader<'a> {
    kubectl: &'a dyn KubectlRunner,
    manager: &'a dyn BundleManager,
    registry: &'a dyn RegistryRefProvider,
    target: &'a ClusterTarget,
    controller_name: String,
}

impl<'a> BundleReader<'a> {
    pub fn new(
        kubectl: &'a dyn KubectlRunner,
        manager: &'a dyn BundleManager,
        registry: &'a dyn RegistryRefProvider,
        target: &'a ClusterTarget,
        controller_name: impl Into<String>,
    ) -> Self {
        Self {
            kubectl,
            manager,
            registry,
            target,
            controller_name: controller_name.into(),
        }
    }

    /// Fetch the latest bundle from `source`
    ///
    /// `None` stands for a missing source and fails before any I/O.
    pub fn get_latest_bundle(
        &self,
        ctx: &Context,
        source: Option<BundleSource>,
    ) -> Result<PackageBundle> {
        match source {
            Some(BundleSource::Cluster) => self.active_bundle_from_cluster(ctx),
            Some(BundleSource::Registry) => self.latest_bundle_from_registry(ctx),
            None => Err(bundle::missing_source()),
        }
    }

    fn active_bundle_from_cluster(&self, ctx: &Context) -> Result<PackageBundle> {
        let controller = ControllerClient::new(self.kubectl, self.target, &self.controller_name);
        let active = controller.active_bundle(ctx)?;
        self.package_bundle(ctx, &active)
    }

    fn package_bundle(&self, ctx: &Context, name: &str) -> Result<PackageBundle> {
        let command = KubectlCommand::new(["get", "packagebundle", name])
            .output("json")
            .kubeconfig(self.target.kubeconfig())
            .namespace(self.target.namespace());

        let out = self.kubectl.run(ctx, &command).map_err(|e| match e {
            PackagesError::Cancelled => e,
            other => bundle::lookup_failed(name, other.to_string()),
        })?;

        serde_json::from_slice(&out)
            .map_err(|e| bundle::parse_failed("package bundle", e.to_string()))
    }

    fn latest_bundle_from_registry(&self, ctx: &Context) -> Result<PackageBundle> {
        let base_ref = self.registry.registry_base_ref(ctx)?;
        debug!(base_ref = %base_ref, "resolving latest bundle from registry");
        self.manager.latest_bundle(ctx, &base_ref)
    }
}
