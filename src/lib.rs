//! Curated packages for Kubernetes clusters
//!
//! Resolves the authoritative package bundle for a cluster, either from the
//! cluster's bundle controller or from an OCI registry, and turns bundle
//! entries into package resources that are created, applied, described or
//! rendered to manifests.
//!
//! External tools (kubectl, helm, oras) sit behind narrow capability traits in
//! [`exec`] and [`registry`], so every component can be driven by fakes.

pub mod bundle;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod exec;
pub mod installer;
pub mod logging;
pub mod package;
pub mod registry;
pub mod source;

#[cfg(test)]
mod test_fixtures;

pub use context::Context;
pub use error::{PackagesError, Result};
