//! Bundle source and Kubernetes version validation errors

use super::PackagesError;

/// Creates an unknown bundle source error
pub fn unknown_bundle_source(input: impl Into<String>) -> PackagesError {
    PackagesError::UnknownBundleSource {
        input: input.into(),
    }
}

/// Creates an invalid Kubernetes version error
pub fn invalid_kube_version(input: impl Into<String>, reason: impl Into<String>) -> PackagesError {
    PackagesError::InvalidKubeVersion {
        input: input.into(),
        reason: reason.into(),
    }
}

/// Creates a missing Kubernetes version error for the given bundle source
pub fn kube_version_required(bundle_source: impl Into<String>) -> PackagesError {
    PackagesError::KubeVersionRequired {
        bundle_source: bundle_source.into(),
    }
}
