//! External tool capabilities
//!
//! Cluster reads and writes go through [`KubectlRunner`]; chart installation
//! goes through [`ChartInstaller`]. Business logic only ever sees these
//! traits, the subprocess-backed [`Kubectl`] and [`Helm`] are wired in by the
//! command layer.

mod helm;
mod kubectl;
mod process;

pub use helm::{ChartInstaller, Helm};
pub use kubectl::{Kubectl, KubectlCommand, KubectlRunner};
pub(crate) use process::run as run_tool;
