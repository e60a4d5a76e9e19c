use clap::{Args, Subcommand};

use super::BundleArgs;

#[derive(Args, Debug)]
pub struct InstallTarget {
    #[command(subcommand)]
    pub resource: InstallResource,
}

#[derive(Subcommand, Debug)]
pub enum InstallResource {
    /// Install a curated package; use `list packages` to discover them
    #[command(alias = "packages")]
    Package(InstallPackageArgs),

    /// Install the curated packages controller, then optionally create packages
    #[command(name = "packagecontroller")]
    PackageController(InstallControllerArgs),
}

/// Arguments for `install package`
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install harbor as my-harbor:\n    curated-packages install package --source cluster harbor\n\n\
                  Install under a custom name:\n    curated-packages install package --source cluster --name registry-ui harbor")]
pub struct InstallPackageArgs {
    #[command(flatten)]
    pub bundle: BundleArgs,

    /// Name to install the package under (defaults to my-<package>)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Package to install
    #[arg(value_name = "PACKAGE")]
    pub package: String,
}

/// Arguments for `install packagecontroller`
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install the controller:\n    curated-packages install packagecontroller\n\n\
                  Install the controller and create generated packages:\n    curated-packages install packagecontroller -f out/curated-packages")]
pub struct InstallControllerArgs {
    /// Manifest file or directory of packages to create once the controller is running
    #[arg(long = "filename", short = 'f', value_name = "LOCATION")]
    pub packages_location: Option<String>,
}
