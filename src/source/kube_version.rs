//! Kubernetes `<major>.<minor>` version parsing

use std::fmt;
use std::str::FromStr;

use crate::error::{PackagesError, Result, source::invalid_kube_version};

const FORMAT_HINT: &str = "kubernetes version must be specified as <major>.<minor>, e.g. 1.22";

/// A Kubernetes cluster version
///
/// Both segments keep the exact decimal text the user typed (`"1.022"` stays
/// `"022"`), they are only checked to be non-negative base-10 integers. The
/// default value is unset; use [`KubeVersion::is_set`] to tell the two apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KubeVersion {
    major: String,
    minor: String,
}

impl KubeVersion {
    /// Parse `<major>.<minor>` from user input, ignoring surrounding whitespace
    pub fn parse(input: &str) -> Result<Self> {
        let pieces: Vec<&str> = input.trim().split('.').collect();
        let [major, minor] = pieces.as_slice() else {
            return Err(invalid_kube_version(input, FORMAT_HINT));
        };

        // Both segments are checked before anything is built.
        validate_segment(input, "major", major)?;
        validate_segment(input, "minor", minor)?;

        Ok(Self {
            major: (*major).to_string(),
            minor: (*minor).to_string(),
        })
    }

    /// Replace this value with the parsed input
    ///
    /// On error the previous value is left untouched.
    pub fn set(&mut self, input: &str) -> Result<()> {
        *self = Self::parse(input)?;
        Ok(())
    }

    pub fn is_set(&self) -> bool {
        !self.major.is_empty() && !self.minor.is_empty()
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }
}

fn validate_segment(input: &str, label: &str, segment: &str) -> Result<()> {
    let is_integer = !segment.is_empty()
        && segment.chars().all(|c| c.is_ascii_digit())
        && segment.parse::<u64>().is_ok();
    if is_integer {
        Ok(())
    } else {
        Err(invalid_kube_version(
            input,
            format!("invalid kubernetes {label} version \"{segment}\""),
        ))
    }
}

impl FromStr for KubeVersion {
    type Err = PackagesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for KubeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            write!(f, "{}.{}", self.major, self.minor)
        } else {
            Ok(())
        }
    }
}
