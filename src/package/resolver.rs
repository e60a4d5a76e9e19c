//! Bundle entry lookup and package synthesis

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::BatchOutcome;
use crate::domain::{BundlePackage, Package, PackageBundle};
use crate::error::{Result, package};

/// Resolves requested package names against one bundle
///
/// Names match case-insensitively. When two entries differ only by case but
/// carry different definitions, looking up that name fails as ambiguous;
/// every other name still resolves.
#[derive(Debug)]
pub struct PackageResolver<'a> {
    bundle: &'a PackageBundle,
    index: HashMap<String, &'a BundlePackage>,
    ambiguous: HashSet<String>,
    namespace: String,
    name_prefix: String,
}

impl<'a> PackageResolver<'a> {
    pub fn new(
        bundle: &'a PackageBundle,
        namespace: impl Into<String>,
        name_prefix: impl Into<String>,
    ) -> Self {
        let mut index = HashMap::with_capacity(bundle.spec.packages.len());
        let mut ambiguous = HashSet::new();
        for entry in &bundle.spec.packages {
            match index.entry(entry.name.to_lowercase()) {
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
                Entry::Occupied(existing) if *existing.get() != entry => {
                    debug!(package = %entry.name, "bundle has conflicting entries for package");
                    ambiguous.insert(existing.key().clone());
                }
                Entry::Occupied(_) => {}
            }
        }

        Self {
            bundle,
            index,
            ambiguous,
            namespace: namespace.into(),
            name_prefix: name_prefix.into(),
        }
    }

    /// Bundle entries in catalog order
    pub fn packages(&self) -> &'a [BundlePackage] {
        &self.bundle.spec.packages
    }

    /// Find the bundle entry for `name`, ignoring case
    pub fn lookup(&self, name: &str) -> Result<&'a BundlePackage> {
        let key = name.to_lowercase();
        if self.ambiguous.contains(&key) {
            return Err(package::ambiguous_name(name));
        }
        self.index
            .get(&key)
            .copied()
            .ok_or_else(|| package::not_found(name))
    }

    /// Name a package is installed under when the caller supplies none
    pub fn default_name(&self, entry: &BundlePackage) -> String {
        format!("{}{}", self.name_prefix, entry.name.to_lowercase())
    }

    /// Resolve exactly one package
    ///
    /// A non-empty `display_name` is used verbatim; otherwise the default
    /// prefixed name is synthesized.
    pub fn resolve_one(&self, name: &str, display_name: Option<&str>) -> Result<Package> {
        let entry = self.lookup(name)?;
        let name = match display_name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(custom) => custom.to_string(),
            None => self.default_name(entry),
        };
        Ok(self.build(entry, name))
    }

    /// Resolve every requested name, continuing past unknown or ambiguous ones
    pub fn resolve_all<S: AsRef<str>>(&self, names: &[S]) -> BatchOutcome<Package> {
        let mut outcome = BatchOutcome::default();
        for name in names {
            let name = name.as_ref();
            match self.lookup(name) {
                Ok(entry) => {
                    let package_name = self.default_name(entry);
                    outcome.succeeded.push(self.build(entry, package_name));
                }
                Err(e) => {
                    warn!(package = name, "skipping package: {e}");
                    outcome.failed.push((name.to_string(), e));
                }
            }
        }
        outcome
    }

    fn build(&self, entry: &BundlePackage, name: String) -> Package {
        Package::from_bundle_package(entry, name, &self.namespace, &self.bundle.api_version)
    }
}
