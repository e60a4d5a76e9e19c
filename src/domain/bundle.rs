//! Package bundle domain types
//!
//! A bundle is the versioned catalog of curated packages valid for one
//! Kubernetes version. The bundle controller is the per-cluster record that
//! names which bundle is active.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Resource metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// A versioned list of installable packages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageBundle {
    #[serde(default)]
    pub api_version: String,

    #[serde(default)]
    pub kind: String,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: PackageBundleSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageBundleSpec {
    #[serde(default)]
    pub packages: Vec<BundlePackage>,
}

/// One catalog entry of a bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundlePackage {
    pub name: String,

    #[serde(default)]
    pub source: BundlePackageSource,
}

/// Where a package's artifacts live
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundlePackageSource {
    #[serde(default)]
    pub registry: String,

    #[serde(default)]
    pub repository: String,

    /// Available versions, newest first
    #[serde(default)]
    pub versions: Vec<SourceVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceVersion {
    pub name: String,

    #[serde(default)]
    pub digest: String,
}

impl BundlePackage {
    /// Names of the available versions in bundle order
    pub fn version_names(&self) -> Vec<&str> {
        self.source.versions.iter().map(|v| v.name.as_str()).collect()
    }
}

/// Cluster-resident record naming the active bundle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageBundleController {
    #[serde(default)]
    pub api_version: String,

    #[serde(default)]
    pub kind: String,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: PackageBundleControllerSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageBundleControllerSpec {
    #[serde(default)]
    pub active_bundle: String,

    /// Remaining spec fields, carried through untouched on upgrade
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
