//! Registry base reference resolution

use crate::context::Context;
use crate::error::{PackagesError, Result};

/// Resolves the registry repository that bundles are published to
pub trait RegistryRefProvider {
    fn registry_base_ref(&self, ctx: &Context) -> Result<String>;
}

/// Base reference taken from configuration, optionally re-hosted
///
/// With a host override the repository path is kept and only the registry
/// host is swapped, e.g. `public.ecr.aws/q0f6t3x4/eksa-package-bundles` with
/// `harbor.local:5000` becomes `harbor.local:5000/q0f6t3x4/eksa-package-bundles`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredRegistry {
    base_ref: String,
    host_override: Option<String>,
}

impl ConfiguredRegistry {
    pub fn new(base_ref: impl Into<String>, host_override: Option<String>) -> Self {
        Self {
            base_ref: base_ref.into(),
            host_override: host_override.filter(|h| !h.trim().is_empty()),
        }
    }
}

impl RegistryRefProvider for ConfiguredRegistry {
    fn registry_base_ref(&self, ctx: &Context) -> Result<String> {
        ctx.check()?;

        let base_ref = self.base_ref.trim().trim_end_matches('/');
        if base_ref.is_empty() {
            return Err(PackagesError::RegistryRefFailed {
                reason: "no registry base reference configured".to_string(),
            });
        }

        let Some(ref host) = self.host_override else {
            return Ok(base_ref.to_string());
        };
        let host = host.trim().trim_end_matches('/');
        let repository = base_ref.split_once('/').map_or(base_ref, |(_, path)| path);
        Ok(format!("{host}/{repository}"))
    }
}
