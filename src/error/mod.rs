//! Error types and handling for curated packages
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`source`]: Bundle source and Kubernetes version validation errors
//! - [`bundle`]: Bundle resolution errors (cluster and registry paths)
//! - [`package`]: Package lookup errors
//! - [`exec`]: External command errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod config;
pub mod exec;
pub mod fs;
pub mod package;
pub mod source;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for curated package operations
#[derive(Error, Diagnostic, Debug)]
pub enum PackagesError {
    // Validation errors
    #[error("unknown bundle source: \"{input}\"")]
    #[diagnostic(
        code(curated_packages::source::unknown_bundle_source),
        help("Valid bundle sources: cluster, registry")
    )]
    UnknownBundleSource { input: String },

    #[error("invalid kubernetes version \"{input}\": {reason}")]
    #[diagnostic(
        code(curated_packages::source::invalid_kube_version),
        help("Specify the version as <major>.<minor>, e.g. 1.22")
    )]
    InvalidKubeVersion { input: String, reason: String },

    #[error("a kubernetes version is required when the bundle source is {bundle_source}")]
    #[diagnostic(
        code(curated_packages::source::kube_version_required),
        help("Pass --kube-version <major>.<minor>")
    )]
    KubeVersionRequired { bundle_source: String },

    // Resolution errors
    #[error("no bundle source specified")]
    #[diagnostic(
        code(curated_packages::bundle::missing_source),
        help("Valid bundle sources: cluster, registry")
    )]
    MissingBundleSource,

    #[error("Failed to get package bundle controller '{name}': {reason}")]
    #[diagnostic(code(curated_packages::bundle::controller_lookup_failed))]
    ControllerLookupFailed { name: String, reason: String },

    #[error("Package bundle controller '{name}' has no active bundle")]
    #[diagnostic(
        code(curated_packages::bundle::no_active_bundle),
        help("Set an active bundle with 'curated-packages upgrade packages --bundle-version <id>'")
    )]
    MissingActiveBundle { name: String },

    #[error("bundle version must not be empty when upgrading package bundle controller '{controller}'")]
    #[diagnostic(
        code(curated_packages::bundle::bundle_version_required),
        help("Pass --bundle-version <bundle name>, e.g. v1-21-1002")
    )]
    BundleVersionRequired { controller: String },

    #[error("Failed to get package bundle '{name}': {reason}")]
    #[diagnostic(code(curated_packages::bundle::lookup_failed))]
    BundleLookupFailed { name: String, reason: String },

    #[error("Failed to unmarshal {what}: {reason}")]
    #[diagnostic(code(curated_packages::bundle::parse_failed))]
    BundleParseFailed { what: String, reason: String },

    #[error("Latest package bundle artifact is empty: {reference}")]
    #[diagnostic(code(curated_packages::bundle::empty_artifact))]
    EmptyBundleArtifact { reference: String },

    #[error("Unable to pull artifact {reference}: {reason}")]
    #[diagnostic(
        code(curated_packages::registry::pull_failed),
        help("Check that the registry is reachable and that you are logged in to it")
    )]
    RegistryPullFailed { reference: String, reason: String },

    #[error("Unable to resolve registry base reference: {reason}")]
    #[diagnostic(code(curated_packages::registry::base_ref_failed))]
    RegistryRefFailed { reason: String },

    // Package errors
    #[error("Package '{name}' not found")]
    #[diagnostic(
        code(curated_packages::package::not_found),
        help("Use 'curated-packages list packages' to discover curated packages")
    )]
    PackageNotFound { name: String },

    #[error("Package name '{name}' matches more than one bundle entry")]
    #[diagnostic(code(curated_packages::package::ambiguous_name))]
    AmbiguousPackageName { name: String },

    // Lifecycle errors
    #[error("{command} execution failure: {reason}")]
    #[diagnostic(code(curated_packages::exec::command_failed))]
    CommandFailed {
        command: String,
        reason: String,
        /// Captured standard output of the failed command
        output: String,
    },

    #[error("No resources found in {namespace} namespace")]
    #[diagnostic(code(curated_packages::exec::no_resources_found))]
    NoResourcesFound { namespace: String },

    // Sequencing errors
    #[error("Failed to install curated packages controller: {reason}")]
    #[diagnostic(
        code(curated_packages::installer::controller_failed),
        help("Install it manually with 'curated-packages install packagecontroller'")
    )]
    ControllerInstallFailed { reason: String },

    #[error("Failed to create curated packages from {location}: {reason}")]
    #[diagnostic(
        code(curated_packages::installer::packages_failed),
        help("Create them manually with 'curated-packages create packages -f {location}'")
    )]
    PackagesInstallFailed { location: String, reason: String },

    #[error("Operation cancelled")]
    #[diagnostic(code(curated_packages::cancelled))]
    Cancelled,

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(curated_packages::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(curated_packages::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(curated_packages::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Unable to create directory {path}: {reason}")]
    #[diagnostic(code(curated_packages::fs::create_dir_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("Unable to write to the file: {path}: {reason}")]
    #[diagnostic(code(curated_packages::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(curated_packages::fs::io_error))]
    IoError { message: String },

    // Serialization errors
    #[error("Unable to serialize {what}: {reason}")]
    #[diagnostic(code(curated_packages::serialize_failed))]
    SerializeFailed { what: String, reason: String },
}

impl PackagesError {
    /// Command output captured alongside the error, if any
    pub fn output(&self) -> Option<&str> {
        match self {
            PackagesError::CommandFailed { output, .. } if !output.is_empty() => Some(output),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PackagesError {
    fn from(err: std::io::Error) -> Self {
        PackagesError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PackagesError {
    fn from(err: serde_yaml::Error) -> Self {
        PackagesError::SerializeFailed {
            what: "yaml document".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PackagesError {
    fn from(err: serde_json::Error) -> Self {
        PackagesError::SerializeFailed {
            what: "json document".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PackagesError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = PackagesError::PackageNotFound {
            name: "harbor".to_string(),
        };
        assert_eq!(err.to_string(), "Package 'harbor' not found");
    }

    #[test]
    fn test_error_code() {
        let err = PackagesError::NoResourcesFound {
            namespace: "eksa-packages".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("curated_packages::exec::no_resources_found".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PackagesError = io_err.into();
        assert!(matches!(err, PackagesError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("invalid: yaml: content: [unclosed");
        let err: PackagesError = parse_result.unwrap_err().into();
        assert!(matches!(err, PackagesError::SerializeFailed { .. }));
    }

    #[test]
    fn test_output_only_for_command_failures() {
        let failed = exec::command_failed("kubectl create", "exit status: 1", "already exists\n");
        assert_eq!(failed.output(), Some("already exists\n"));

        let silent = exec::command_failed("kubectl create", "exit status: 1", "");
        assert_eq!(silent.output(), None);

        assert_eq!(PackagesError::Cancelled.output(), None);
    }

    #[test]
    fn test_installer_help_names_location() {
        let err = PackagesError::PackagesInstallFailed {
            location: "/tmp/curated-packages".to_string(),
            reason: "boom".to_string(),
        };
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("create packages -f /tmp/curated-packages"));
    }

    test_error_contains!(
        test_unknown_bundle_source_error,
        source::unknown_bundle_source("git"),
        "unknown bundle source",
        "\"git\""
    );

    test_error_contains!(
        test_missing_bundle_source_error,
        bundle::missing_source(),
        "no bundle source specified"
    );

    #[test]
    fn test_bundle_version_required_hints_flag() {
        let err = bundle::version_required("eksa-packages-bundle-controller");
        assert!(err.to_string().contains("bundle version must not be empty"));
        assert!(err.to_string().contains("'eksa-packages-bundle-controller'"));
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("--bundle-version"));
        assert!(!help.contains("upgrade packages"));
    }

    #[test]
    fn test_missing_bundle_source_has_no_empty_quotes() {
        let err = bundle::missing_source();
        assert!(!err.to_string().contains("\"\""));
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("cluster, registry"));
    }

    test_error_contains!(
        test_no_resources_found_error,
        exec::no_resources_found("eksa-packages"),
        "No resources found in eksa-packages namespace"
    );

    test_error_contains!(
        test_cancelled_error,
        PackagesError::Cancelled,
        "Operation cancelled"
    );
}
