use clap::{Args, Subcommand};
use std::path::PathBuf;

use super::BundleArgs;

#[derive(Args, Debug)]
pub struct GenerateTarget {
    #[command(subcommand)]
    pub resource: GenerateResource,
}

#[derive(Subcommand, Debug)]
pub enum GenerateResource {
    /// Generate package manifests from the active bundle
    #[command(alias = "package")]
    Packages(GeneratePackagesArgs),
}

/// Arguments for `generate packages`
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print manifests:\n    curated-packages generate packages --source cluster harbor hello-eks-anywhere\n\n\
                  Write manifests to ./out/curated-packages/:\n    curated-packages generate packages --source cluster --directory out harbor")]
pub struct GeneratePackagesArgs {
    #[command(flatten)]
    pub bundle: BundleArgs,

    /// Directory to write one manifest per package into, under curated-packages/
    #[arg(long, short = 'd', value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Packages to generate
    #[arg(required = true, value_name = "PACKAGE")]
    pub packages: Vec<String>,
}
