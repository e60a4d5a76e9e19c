//! Bundle resolution
//!
//! - [`BundleReader`] returns the authoritative bundle from the cluster or a registry
//! - [`ControllerClient`] reads the cluster's bundle controller and moves its active bundle

mod controller;
mod reader;

pub use controller::ControllerClient;
pub use reader::BundleReader;
