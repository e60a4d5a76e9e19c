//! Per-invocation configuration
//!
//! - [`PackagesConfig`]: namespace, tool binaries, registry and controller
//!   chart settings, read from an optional YAML file over built-in defaults
//! - [`ClusterTarget`]: the kubeconfig and namespace cluster commands run against
//!
//! Configuration is built once by the binary and handed to components by
//! reference; nothing here is global or mutable after load.

pub mod packages;
pub mod target;

pub use packages::{ControllerChart, PackagesConfig};
pub use target::ClusterTarget;
