//! Command helper utilities

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::cli::BundleArgs;
use curated_packages::Context;
use curated_packages::bundle::{BundleReader, ControllerClient};
use curated_packages::config::{ClusterTarget, PackagesConfig};
use curated_packages::domain::PackageBundle;
use curated_packages::error::Result;
use curated_packages::exec::Kubectl;
use curated_packages::package::{BatchOutcome, PackageClient};
use curated_packages::registry::{ConfiguredRegistry, OrasPuller, RegistryBundleManager};
use curated_packages::source::validate_kube_version;

/// Everything a cluster-facing command needs
pub struct Runtime {
    pub config: PackagesConfig,
    pub target: ClusterTarget,
    pub kubectl: Kubectl,
    pub ctx: Context,
}

impl Runtime {
    /// Load configuration and bind it to the selected cluster
    pub fn load(config_path: Option<&Path>, kubeconfig: Option<PathBuf>) -> Result<Self> {
        let config = PackagesConfig::load(config_path)?;
        let target = config.target(kubeconfig);
        let kubectl = Kubectl::new(config.kubectl.clone());
        debug!(
            namespace = target.namespace(),
            kubeconfig = ?target.kubeconfig(),
            "loaded configuration"
        );
        Ok(Self {
            config,
            target,
            kubectl,
            ctx: Context::background(),
        })
    }

    pub fn package_client(&self) -> PackageClient<'_> {
        PackageClient::new(&self.kubectl, &self.target, self.config.output_subdir.clone())
    }

    pub fn controller_client(&self) -> ControllerClient<'_> {
        ControllerClient::new(
            &self.kubectl,
            &self.target,
            self.config.controller_name.clone(),
        )
    }
}

/// Read the bundle selected by `--source`
pub fn latest_bundle(rt: &Runtime, args: &BundleArgs) -> Result<PackageBundle> {
    validate_kube_version(args.kube_version.as_ref(), args.source)?;

    let puller = OrasPuller::new(rt.config.oras.clone());
    let manager =
        RegistryBundleManager::new(args.kube_version.clone().unwrap_or_default(), &puller);
    let registry = ConfiguredRegistry::new(rt.config.registry_base_ref.clone(), args.registry.clone());
    let reader = BundleReader::new(
        &rt.kubectl,
        &manager,
        &registry,
        &rt.target,
        rt.config.controller_name.clone(),
    );

    let spinner = spinner(format!("Reading package bundle from {}", args.source));
    let result = reader.get_latest_bundle(&rt.ctx, Some(args.source));
    spinner.finish_and_clear();
    result
}

/// Spinner on stderr; hidden when stderr is not a terminal
fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}...") {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Keep what succeeded, or fail with the first error when nothing did
pub fn require_any<T>(outcome: BatchOutcome<T>) -> Result<Vec<T>> {
    let BatchOutcome { succeeded, failed } = outcome;
    match failed.into_iter().next() {
        Some((_, err)) if succeeded.is_empty() => Err(err),
        _ => Ok(succeeded),
    }
}

/// Print command output as-is
pub fn print_output(out: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
