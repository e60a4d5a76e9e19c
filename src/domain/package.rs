//! Package resource
//!
//! A `Package` is the installable resource derived from one bundle entry. It
//! is built per invocation and never cached.

use serde::{Deserialize, Serialize};

use super::bundle::{BundlePackage, ObjectMeta};
use crate::error::Result;

/// Kind discriminator of package resources
pub const PACKAGE_KIND: &str = "Package";

/// An installable curated package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: PackageSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSpec {
    /// Canonical catalog name of the bundle entry
    pub package_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target_namespace: String,
}

impl Package {
    /// Build a package from a bundle entry
    ///
    /// `api_version` must be the parent bundle's API version so the child
    /// resource never drifts from the bundle it came from.
    pub fn from_bundle_package(
        entry: &BundlePackage,
        name: impl Into<String>,
        namespace: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        let namespace = namespace.into();
        Self {
            api_version: api_version.into(),
            kind: PACKAGE_KIND.to_string(),
            metadata: ObjectMeta {
                name: name.into(),
                namespace: Some(namespace.clone()),
            },
            spec: PackageSpec {
                package_name: entry.name.clone(),
                target_namespace: namespace,
            },
        }
    }

    /// Name the package is installed under
    pub fn display_name(&self) -> &str {
        &self.metadata.name
    }

    /// Render the package as a YAML manifest
    pub fn to_manifest(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
