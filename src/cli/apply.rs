use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ApplyTarget {
    #[command(subcommand)]
    pub resource: ManifestResource,
}

#[derive(Args, Debug)]
pub struct CreateTarget {
    #[command(subcommand)]
    pub resource: ManifestResource,
}

#[derive(Subcommand, Debug)]
pub enum ManifestResource {
    /// Submit curated packages from a manifest file
    #[command(alias = "package")]
    Packages(ManifestFileArgs),
}

/// Arguments for `apply packages` and `create packages`
#[derive(Args, Debug)]
pub struct ManifestFileArgs {
    /// Manifest file or directory
    #[arg(long = "filename", short = 'f', value_name = "FILE")]
    pub file: PathBuf,
}
