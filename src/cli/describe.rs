use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct DescribeTarget {
    #[command(subcommand)]
    pub resource: DescribeResource,
}

#[derive(Subcommand, Debug)]
pub enum DescribeResource {
    /// Show details of installed curated packages
    #[command(alias = "package")]
    Packages(DescribePackagesArgs),
}

/// Arguments for `describe packages`
#[derive(Args, Debug)]
pub struct DescribePackagesArgs {
    /// Installed package names (all when omitted)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}
