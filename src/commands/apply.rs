//! Apply and create command implementations
//!
//! Both submit a manifest file or directory; `create` refuses to touch
//! packages that already exist.

use super::helpers::{Runtime, print_output};
use crate::cli::{ApplyTarget, CreateTarget, ManifestResource};
use curated_packages::error::Result;

/// Run apply command
pub fn run_apply(rt: &Runtime, target: ApplyTarget) -> Result<()> {
    let ManifestResource::Packages(args) = target.resource;
    let out = rt.package_client().apply_manifest_file(&rt.ctx, &args.file)?;
    print_output(&out)
}

/// Run create command
pub fn run_create(rt: &Runtime, target: CreateTarget) -> Result<()> {
    let ManifestResource::Packages(args) = target.resource;
    let out = rt
        .package_client()
        .create_manifest_file(&rt.ctx, &args.file)?;
    print_output(&out)
}
