//! Validated bundle configuration values parsed from user input
//!
//! - `bundle_source.rs`: where the active bundle is read from (`cluster` or `registry`)
//! - `kube_version.rs`: the `<major>.<minor>` Kubernetes version a bundle must match
//!
//! Both types reject invalid input atomically: a failed parse never leaves a
//! partially updated value behind.

pub mod bundle_source;
pub mod kube_version;

pub use bundle_source::BundleSource;
pub use kube_version::KubeVersion;

use crate::error::{Result, source::kube_version_required};

/// Check that a Kubernetes version was supplied when the source needs one
///
/// Registry lookups bind the bundle to a Kubernetes version; cluster lookups
/// read whatever bundle the cluster has active and ignore the version.
pub fn validate_kube_version(kube_version: Option<&KubeVersion>, source: BundleSource) -> Result<()> {
    match source {
        BundleSource::Registry if kube_version.is_none_or(|v| !v.is_set()) => {
            Err(kube_version_required(source.as_str()))
        }
        _ => Ok(()),
    }
}
