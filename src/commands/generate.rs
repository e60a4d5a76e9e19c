//! Generate command implementation
//!
//! Resolves the requested packages against the selected bundle and renders
//! their manifests, either to stdout or one file per package.

use std::io;

use console::Style;

use super::helpers::{Runtime, latest_bundle, require_any};
use crate::cli::{GenerateResource, GenerateTarget};
use curated_packages::error::Result;
use curated_packages::package::PackageResolver;

/// Run generate command
///
/// Unknown package names are reported and skipped; the command only fails
/// when none of them resolve.
pub fn run(rt: &Runtime, target: GenerateTarget) -> Result<()> {
    let GenerateResource::Packages(args) = target.resource;
    let bundle = latest_bundle(rt, &args.bundle)?;
    let resolver = PackageResolver::new(&bundle, rt.target.namespace(), &rt.config.name_prefix);
    let packages = require_any(resolver.resolve_all(&args.packages))?;

    let client = rt.package_client();
    let Some(directory) = args.directory else {
        return client.render_to_writer(&packages, &mut io::stdout().lock());
    };

    let files = require_any(client.render_to_files(&packages, &directory)?)?;
    for file in files {
        println!("{} {}", Style::new().green().apply_to("wrote"), file.display());
    }
    Ok(())
}
