//! Domain models for curated packages
//!
//! This module contains the resource shapes exchanged with the cluster and
//! the registry. The schema is owned by the packages API; only the fields
//! this tool reads or writes are modelled.

pub mod bundle;
pub mod package;

pub use bundle::{
    BundlePackage, BundlePackageSource, ObjectMeta, PackageBundle, PackageBundleController,
    PackageBundleControllerSpec, PackageBundleSpec, SourceVersion,
};
pub use package::{PACKAGE_KIND, Package, PackageSpec};
