//! List command implementation
//!
//! Prints the package/version table of the bundle selected by `--source`.

use std::io;

use super::helpers::{Runtime, latest_bundle};
use crate::cli::{ListResource, ListTarget};
use curated_packages::error::Result;

/// Run list command
pub fn run(rt: &Runtime, target: ListTarget) -> Result<()> {
    let ListResource::Packages(args) = target.resource;
    let bundle = latest_bundle(rt, &args.bundle)?;
    rt.package_client()
        .list_display(&bundle.spec.packages, &mut io::stdout().lock())
}
