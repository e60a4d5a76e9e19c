use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct DeleteTarget {
    #[command(subcommand)]
    pub resource: DeleteResource,
}

#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete installed curated packages
    #[command(alias = "package")]
    Packages(DeletePackagesArgs),
}

/// Arguments for `delete packages`
#[derive(Args, Debug)]
pub struct DeletePackagesArgs {
    /// Installed package names
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,
}
