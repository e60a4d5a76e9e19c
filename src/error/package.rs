//! Package lookup errors

use super::PackagesError;

/// Creates a package not found error
pub fn not_found(name: impl Into<String>) -> PackagesError {
    PackagesError::PackageNotFound { name: name.into() }
}

/// Creates an ambiguous package name error
pub fn ambiguous_name(name: impl Into<String>) -> PackagesError {
    PackagesError::AmbiguousPackageName { name: name.into() }
}
