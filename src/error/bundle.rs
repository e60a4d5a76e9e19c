//! Bundle resolution errors

use super::PackagesError;

/// Creates an error for a bundle source that was never given
pub fn missing_source() -> PackagesError {
    PackagesError::MissingBundleSource
}

/// Creates a controller lookup failed error
pub fn controller_lookup_failed(name: impl Into<String>, reason: impl Into<String>) -> PackagesError {
    PackagesError::ControllerLookupFailed {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a blank upgrade target on `controller`
pub fn version_required(controller: impl Into<String>) -> PackagesError {
    PackagesError::BundleVersionRequired {
        controller: controller.into(),
    }
}

/// Creates a bundle lookup failed error
pub fn lookup_failed(name: impl Into<String>, reason: impl Into<String>) -> PackagesError {
    PackagesError::BundleLookupFailed {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates a bundle parse failed error
pub fn parse_failed(what: impl Into<String>, reason: impl Into<String>) -> PackagesError {
    PackagesError::BundleParseFailed {
        what: what.into(),
        reason: reason.into(),
    }
}

/// Creates a registry pull failed error
pub fn pull_failed(reference: impl Into<String>, reason: impl Into<String>) -> PackagesError {
    PackagesError::RegistryPullFailed {
        reference: reference.into(),
        reason: reason.into(),
    }
}
