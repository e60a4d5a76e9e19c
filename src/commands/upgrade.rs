//! Upgrade command implementation

use super::helpers::{Runtime, print_output};
use crate::cli::{UpgradeResource, UpgradeTarget};
use curated_packages::error::Result;

/// Run upgrade command
///
/// Re-applies the bundle controller with a new active bundle.
pub fn run(rt: &Runtime, target: UpgradeTarget) -> Result<()> {
    let UpgradeResource::Packages(args) = target.resource;
    let client = rt.controller_client();
    let controller = client.get(&rt.ctx)?;
    let out = client.upgrade_bundle(&rt.ctx, &controller, &args.bundle_version)?;
    print_output(&out)
}
