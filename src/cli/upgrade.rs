use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct UpgradeTarget {
    #[command(subcommand)]
    pub resource: UpgradeResource,
}

#[derive(Subcommand, Debug)]
pub enum UpgradeResource {
    /// Make another package bundle the cluster's active bundle
    #[command(alias = "package")]
    Packages(UpgradePackagesArgs),
}

/// Arguments for `upgrade packages`
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Activate bundle v1-21-1002:\n    curated-packages upgrade packages --bundle-version v1-21-1002")]
pub struct UpgradePackagesArgs {
    /// Bundle to activate
    #[arg(long = "bundle-version", value_name = "BUNDLE")]
    pub bundle_version: String,
}
