//! CLI definitions using clap derive API
//!
//! Commands follow a verb-noun layout (`list packages`, `install package`).
//! Each verb's argument types live in their own submodule:
//! - bundle: flags shared by commands that resolve a bundle
//! - list, generate, install, get, describe, delete, apply, upgrade
//! - completions: shell completion arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod apply;
pub mod bundle;
pub mod completions;
pub mod delete;
pub mod describe;
pub mod generate;
pub mod get;
pub mod install;
pub mod list;
pub mod upgrade;

pub use apply::{ApplyTarget, CreateTarget, ManifestResource};
pub use bundle::BundleArgs;
pub use completions::CompletionsArgs;
pub use delete::{DeleteResource, DeleteTarget};
pub use describe::{DescribeResource, DescribeTarget};
pub use generate::{GenerateResource, GenerateTarget};
pub use get::{GetResource, GetTarget, OutputFormat};
pub use install::{InstallControllerArgs, InstallPackageArgs, InstallResource, InstallTarget};
pub use list::{ListResource, ListTarget};
pub use upgrade::{UpgradeResource, UpgradeTarget};

/// Curated packages for Kubernetes clusters
///
/// Discover, generate, install and manage curated packages.
#[derive(Parser, Debug)]
#[command(
    name = "curated-packages",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Curated package management for Kubernetes clusters",
    long_about = "Manages curated packages: vendor-vetted, versioned applications distributed \
                  through package bundles. The active bundle is read from the cluster's bundle \
                  controller or pulled from a registry for a given Kubernetes version.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  curated-packages list packages --source cluster                  \x1b[90m# Packages of the active bundle\x1b[0m\n   \
                  curated-packages list packages --source registry --kube-version 1.22\n   \
                  curated-packages generate packages --source cluster harbor        \x1b[90m# Print a package manifest\x1b[0m\n   \
                  curated-packages install package --source cluster harbor          \x1b[90m# Install as my-harbor\x1b[0m\n   \
                  curated-packages describe packages my-harbor\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to <config dir>/curated-packages/config.yaml)
    #[arg(long, global = true, env = "CURATED_PACKAGES_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Kubeconfig of the cluster to operate on
    #[arg(long, global = true, env = "KUBECONFIG", value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List curated packages available in the bundle
    List(ListTarget),

    /// Generate package manifests
    Generate(GenerateTarget),

    /// Install a package or the packages controller
    Install(InstallTarget),

    /// Get installed packages
    Get(GetTarget),

    /// Describe installed packages
    Describe(DescribeTarget),

    /// Delete installed packages
    Delete(DeleteTarget),

    /// Apply packages from a manifest file
    Apply(ApplyTarget),

    /// Create packages from a manifest file
    Create(CreateTarget),

    /// Move the cluster to another package bundle
    Upgrade(UpgradeTarget),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
