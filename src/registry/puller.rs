//! Raw artifact retrieval from an OCI registry

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::context::Context;
use crate::error::{PackagesError, Result, bundle::pull_failed};
use crate::exec;

/// Fetches the content of a registry artifact
pub trait RegistryPuller {
    fn pull(&self, ctx: &Context, reference: &str) -> Result<Vec<u8>>;
}

/// Pulls artifacts with the `oras` CLI into a scratch directory
#[derive(Debug, Clone)]
pub struct OrasPuller {
    binary: PathBuf,
}

impl OrasPuller {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl RegistryPuller for OrasPuller {
    fn pull(&self, ctx: &Context, reference: &str) -> Result<Vec<u8>> {
        let scratch = TempDir::new().map_err(|e| pull_failed(reference, e.to_string()))?;
        let args = vec![
            "pull".to_string(),
            reference.to_string(),
            "--output".to_string(),
            scratch.path().display().to_string(),
        ];

        exec::run_tool(ctx, &self.binary, &args, None).map_err(|e| match e {
            PackagesError::Cancelled => e,
            other => pull_failed(reference, other.to_string()),
        })?;

        let mut files: Vec<PathBuf> = fs::read_dir(scratch.path())?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        let first = files
            .first()
            .ok_or_else(|| pull_failed(reference, "artifact contains no files"))?;
        Ok(fs::read(first)?)
    }
}
