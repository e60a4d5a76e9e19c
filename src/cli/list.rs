use clap::{Args, Subcommand};

use super::BundleArgs;

#[derive(Args, Debug)]
pub struct ListTarget {
    #[command(subcommand)]
    pub resource: ListResource,
}

#[derive(Subcommand, Debug)]
pub enum ListResource {
    /// List the packages of the active bundle with their versions
    #[command(alias = "package")]
    Packages(ListPackagesArgs),
}

/// Arguments for `list packages`
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Packages of the cluster's active bundle:\n    curated-packages list packages --source cluster\n\n\
                  Latest bundle for Kubernetes 1.22:\n    curated-packages list packages --source registry --kube-version 1.22")]
pub struct ListPackagesArgs {
    #[command(flatten)]
    pub bundle: BundleArgs,
}
