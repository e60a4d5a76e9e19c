//! External command errors

use super::PackagesError;

/// Creates a command failed error carrying the command's captured output
pub fn command_failed(
    command: impl Into<String>,
    reason: impl Into<String>,
    output: impl Into<String>,
) -> PackagesError {
    PackagesError::CommandFailed {
        command: command.into(),
        reason: reason.into(),
        output: output.into(),
    }
}

/// Creates a no resources found error
pub fn no_resources_found(namespace: impl Into<String>) -> PackagesError {
    PackagesError::NoResourcesFound {
        namespace: namespace.into(),
    }
}
