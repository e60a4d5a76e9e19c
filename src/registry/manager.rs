//! Latest-bundle resolution for a Kubernetes version

use tracing::debug;

use super::puller::RegistryPuller;
use crate::context::Context;
use crate::domain::PackageBundle;
use crate::error::{
    PackagesError, Result, bundle::parse_failed, source::kube_version_required,
};
use crate::source::{BundleSource, KubeVersion};

/// Resolves the latest bundle published for a Kubernetes version
pub trait BundleManager {
    fn latest_bundle(&self, ctx: &Context, base_ref: &str) -> Result<PackageBundle>;
}

/// Bundle manager that pulls `<base>:v<major>-<minor>-latest`
pub struct RegistryBundleManager<'a> {
    kube_version: KubeVersion,
    puller: &'a dyn RegistryPuller,
}

impl<'a> RegistryBundleManager<'a> {
    pub fn new(kube_version: KubeVersion, puller: &'a dyn RegistryPuller) -> Self {
        Self {
            kube_version,
            puller,
        }
    }

    /// Artifact reference of the latest bundle for this manager's version
    pub fn latest_ref(&self, base_ref: &str) -> Result<String> {
        if !self.kube_version.is_set() {
            return Err(kube_version_required(BundleSource::Registry.as_str()));
        }
        Ok(format!(
            "{base_ref}:v{}-{}-latest",
            self.kube_version.major(),
            self.kube_version.minor()
        ))
    }
}

impl BundleManager for RegistryBundleManager<'_> {
    fn latest_bundle(&self, ctx: &Context, base_ref: &str) -> Result<PackageBundle> {
        let reference = self.latest_ref(base_ref)?;
        debug!(reference = %reference, "pulling latest package bundle");

        let data = self.puller.pull(ctx, &reference)?;
        if data.trim_ascii().is_empty() {
            return Err(PackagesError::EmptyBundleArtifact { reference });
        }

        serde_yaml::from_slice(&data).map_err(|e| parse_failed("package bundle", e.to_string()))
    }
}
