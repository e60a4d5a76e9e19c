//! Chart installation capability backed by `helm`

use std::path::{Path, PathBuf};

use tracing::debug;

use super::process;
use crate::context::Context;
use crate::error::Result;

/// Installs helm charts into a cluster
pub trait ChartInstaller {
    /// Install the chart at `oci_uri` as release `name`
    ///
    /// An empty `version` installs the chart's latest version.
    fn install_chart_from_name(
        &self,
        ctx: &Context,
        oci_uri: &str,
        kubeconfig: Option<&Path>,
        name: &str,
        version: &str,
    ) -> Result<()>;

    /// Whether a release called `name` already exists
    fn is_release_installed(&self, ctx: &Context, name: &str, kubeconfig: Option<&Path>) -> bool;
}

/// helm found on `PATH` or at a configured location
#[derive(Debug, Clone)]
pub struct Helm {
    binary: PathBuf,
}

impl Helm {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

fn with_kubeconfig(mut args: Vec<String>, kubeconfig: Option<&Path>) -> Vec<String> {
    if let Some(path) = kubeconfig {
        args.extend(["--kubeconfig".to_string(), path.display().to_string()]);
    }
    args
}

fn install_args(oci_uri: &str, kubeconfig: Option<&Path>, name: &str, version: &str) -> Vec<String> {
    let mut args = vec!["install".to_string(), name.to_string(), oci_uri.to_string()];
    if !version.is_empty() {
        args.extend(["--version".to_string(), version.to_string()]);
    }
    with_kubeconfig(args, kubeconfig)
}

impl ChartInstaller for Helm {
    fn install_chart_from_name(
        &self,
        ctx: &Context,
        oci_uri: &str,
        kubeconfig: Option<&Path>,
        name: &str,
        version: &str,
    ) -> Result<()> {
        let args = install_args(oci_uri, kubeconfig, name, version);
        let out = process::run(ctx, &self.binary, &args, None)?;
        debug!(release = name, output = %String::from_utf8_lossy(&out).trim(), "helm install finished");
        Ok(())
    }

    fn is_release_installed(&self, ctx: &Context, name: &str, kubeconfig: Option<&Path>) -> bool {
        let args = with_kubeconfig(vec!["status".to_string(), name.to_string()], kubeconfig);
        process::run(ctx, &self.binary, &args, None).is_ok()
    }
}
