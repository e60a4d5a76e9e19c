//! Install command implementation
//!
//! - `install package`: create one package from the selected bundle
//! - `install packagecontroller`: install the controller chart, then create
//!   the packages at `-f` if one was given

use std::path::Path;

use super::helpers::{Runtime, latest_bundle, print_output};
use crate::cli::{InstallControllerArgs, InstallPackageArgs, InstallResource, InstallTarget};
use curated_packages::error::Result;
use curated_packages::exec::Helm;
use curated_packages::installer::{HelmPackageController, Installer};
use curated_packages::package::PackageResolver;

/// Run install command
pub fn run(rt: &Runtime, target: InstallTarget) -> Result<()> {
    match target.resource {
        InstallResource::Package(args) => install_package(rt, args),
        InstallResource::PackageController(args) => install_controller(rt, args),
    }
}

fn install_package(rt: &Runtime, args: InstallPackageArgs) -> Result<()> {
    let bundle = latest_bundle(rt, &args.bundle)?;
    let resolver = PackageResolver::new(&bundle, rt.target.namespace(), &rt.config.name_prefix);
    let package = resolver.resolve_one(&args.package, args.name.as_deref())?;
    let out = rt.package_client().install(&rt.ctx, &package)?;
    print_output(&out)
}

fn install_controller(rt: &Runtime, args: InstallControllerArgs) -> Result<()> {
    let kubeconfig = rt.target.kubeconfig().map(Path::to_path_buf);
    let helm = Helm::new(rt.config.helm.clone());
    let controller =
        HelmPackageController::new(&helm, &rt.config.controller_chart, kubeconfig.clone());
    let client = rt.package_client();

    let installer = Installer::new(
        &controller,
        &client,
        args.packages_location.unwrap_or_default(),
        kubeconfig,
    );
    let out = installer.install_curated_packages(&rt.ctx)?;
    print_output(&out)
}
