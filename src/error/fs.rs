//! File system errors

use super::PackagesError;

/// Creates a directory creation failed error
pub fn create_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> PackagesError {
    PackagesError::DirectoryCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> PackagesError {
    PackagesError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
