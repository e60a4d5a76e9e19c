//! Describe command implementation

use super::helpers::{Runtime, print_output};
use crate::cli::{DescribeResource, DescribeTarget};
use curated_packages::error::Result;

/// Run describe command
pub fn run(rt: &Runtime, target: DescribeTarget) -> Result<()> {
    let DescribeResource::Packages(args) = target.resource;
    let out = rt.package_client().describe(&rt.ctx, &args.names)?;
    print_output(&out)
}
