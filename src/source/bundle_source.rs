//! Bundle source handling
//!
//! This module provides the BundleSource enum naming where the active
//! package bundle is read from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PackagesError, Result, source::unknown_bundle_source};

/// Where to find the authoritative package bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleSource {
    /// Read the bundle the cluster's bundle controller marks as active
    Cluster,
    /// Pull the latest bundle for a Kubernetes version from an artifact registry
    Registry,
}

impl BundleSource {
    /// Parse a bundle source from user input
    ///
    /// Input is trimmed and compared case-insensitively, so ` Cluster ` and
    /// `REGISTRY` are accepted.
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "cluster" => Ok(BundleSource::Cluster),
            "registry" => Ok(BundleSource::Registry),
            _ => Err(unknown_bundle_source(input)),
        }
    }

    /// Replace this value with the parsed input
    ///
    /// On error the previous value is left untouched.
    pub fn set(&mut self, input: &str) -> Result<()> {
        *self = Self::parse(input)?;
        Ok(())
    }

    /// Canonical lower-case name
    pub fn as_str(self) -> &'static str {
        match self {
            BundleSource::Cluster => "cluster",
            BundleSource::Registry => "registry",
        }
    }
}

impl FromStr for BundleSource {
    type Err = PackagesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BundleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_any_casing_and_padding() {
        for input in ["cluster", "Cluster", "CLUSTER", "  cluster ", "\tcLuStEr\n"] {
            assert_eq!(BundleSource::parse(input).unwrap(), BundleSource::Cluster);
        }
        for input in ["registry", "Registry", " REGISTRY "] {
            assert_eq!(BundleSource::parse(input).unwrap(), BundleSource::Registry);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_sources() {
        for input in ["", "git", "clusters", "reg istry", "1.21", "cluster,registry"] {
            let err = BundleSource::parse(input).unwrap_err();
            assert!(
                matches!(err, PackagesError::UnknownBundleSource { .. }),
                "expected rejection for {input:?}"
            );
        }
    }

    #[test]
    fn test_set_keeps_previous_value_on_error() {
        let mut source = BundleSource::Registry;
        assert!(source.set("nowhere").is_err());
        assert_eq!(source, BundleSource::Registry);

        source.set(" Cluster").unwrap();
        assert_eq!(source, BundleSource::Cluster);
    }

    #[test]
    fn test_display_is_canonical_lower_case() {
        assert_eq!(BundleSource::parse("CLUSTER").unwrap().to_string(), "cluster");
        assert_eq!(BundleSource::Registry.to_string(), "registry");
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let yaml = serde_yaml::to_string(&BundleSource::Registry).unwrap();
        assert_eq!(yaml.trim(), "registry");
        let parsed: BundleSource = serde_yaml::from_str("cluster").unwrap();
        assert_eq!(parsed, BundleSource::Cluster);
    }
}
