//! Get command implementation

use super::helpers::{Runtime, print_output};
use crate::cli::{GetResource, GetTarget, OutputFormat};
use curated_packages::error::Result;

/// Run get command
pub fn run(rt: &Runtime, target: GetTarget) -> Result<()> {
    let GetResource::Packages(args) = target.resource;
    let out = rt.package_client().get(
        &rt.ctx,
        &args.names,
        args.output.map(OutputFormat::as_str),
    )?;
    print_output(&out)
}
