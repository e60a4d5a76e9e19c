//! Package resolution and lifecycle
//!
//! - [`PackageResolver`]: case-insensitive lookup of bundle entries and
//!   synthesis of installable [`Package`](crate::domain::Package) resources
//! - [`PackageClient`]: create/apply/delete/describe/get against the cluster
//!   and rendering of manifests to files or a writer
//! - [`display`]: the package/version table shown by `list packages`

pub mod client;
pub mod display;
pub mod resolver;

pub use client::PackageClient;
pub use resolver::PackageResolver;

use crate::error::PackagesError;

/// Result of a batch operation that continues past failing items
///
/// Each failure is keyed by the item it belongs to. Whether a partial result
/// counts as success is left to the caller.
#[derive(Debug)]
pub struct BatchOutcome<T> {
    pub succeeded: Vec<T>,
    pub failed: Vec<(String, PackagesError)>,
}

impl<T> Default for BatchOutcome<T> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl<T> BatchOutcome<T> {
    /// True when no item failed
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
