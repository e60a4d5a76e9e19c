//! Delete command implementation

use super::helpers::{Runtime, print_output};
use crate::cli::{DeleteResource, DeleteTarget};
use curated_packages::error::Result;

/// Run delete command
pub fn run(rt: &Runtime, target: DeleteTarget) -> Result<()> {
    let DeleteResource::Packages(args) = target.resource;
    let out = rt.package_client().delete(&rt.ctx, &args.names)?;
    print_output(&out)
}
