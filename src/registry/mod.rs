//! Registry path of bundle resolution
//!
//! - [`RegistryRefProvider`] names the repository bundles are published to
//! - [`BundleManager`] resolves the latest bundle for a Kubernetes version
//! - [`RegistryPuller`] fetches raw artifacts; [`OrasPuller`] shells out to `oras`

mod base_ref;
mod manager;
mod puller;

pub use base_ref::{ConfiguredRegistry, RegistryRefProvider};
pub use manager::{BundleManager, RegistryBundleManager};
pub use puller::{OrasPuller, RegistryPuller};
