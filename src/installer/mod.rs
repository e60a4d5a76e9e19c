//! Curated packages installation sequence
//!
//! Installation runs two steps in order and never goes back:
//! 1. enable the packages controller on the cluster
//! 2. create the rendered package manifests, when a location was given
//!
//! A failing step ends the run with a hint naming the manual command that
//! finishes the job.

mod controller;

pub use controller::HelmPackageController;

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::context::Context;
use crate::error::{PackagesError, Result};

/// Enables curated packages on a cluster
pub trait PackageController {
    fn enable_curated_packages(&self, ctx: &Context) -> Result<()>;
    fn is_installed(&self, ctx: &Context) -> bool;
}

/// Creates packages from rendered manifests
pub trait PackageHandler {
    fn create_packages(
        &self,
        ctx: &Context,
        location: &str,
        kubeconfig: Option<&Path>,
    ) -> Result<String>;
}

/// Sequences controller installation and package creation
pub struct Installer<'a> {
    controller: &'a dyn PackageController,
    handler: &'a dyn PackageHandler,
    packages_location: String,
    kubeconfig: Option<PathBuf>,
}

impl<'a> Installer<'a> {
    /// An empty `packages_location` skips package creation
    pub fn new(
        controller: &'a dyn PackageController,
        handler: &'a dyn PackageHandler,
        packages_location: impl Into<String>,
        kubeconfig: Option<PathBuf>,
    ) -> Self {
        Self {
            controller,
            handler,
            packages_location: packages_location.into(),
            kubeconfig,
        }
    }

    /// Run both steps, stopping at the first failure
    ///
    /// Returns the output of the package creation step, empty when it was
    /// skipped.
    pub fn install_curated_packages(&self, ctx: &Context) -> Result<String> {
        self.install_controller(ctx).map_err(|e| match e {
            PackagesError::Cancelled => e,
            other => {
                error!(
                    error = %other,
                    "Error when installing curated packages controller; install it with \
                     'curated-packages install packagecontroller'"
                );
                PackagesError::ControllerInstallFailed {
                    reason: other.to_string(),
                }
            }
        })?;

        self.install_packages(ctx).map_err(|e| match e {
            PackagesError::Cancelled => e,
            other => {
                error!(
                    error = %other,
                    "Error when creating curated packages; create them with \
                     'curated-packages create packages -f {}'",
                    self.packages_location
                );
                PackagesError::PackagesInstallFailed {
                    location: self.packages_location.clone(),
                    reason: other.to_string(),
                }
            }
        })
    }

    fn install_controller(&self, ctx: &Context) -> Result<()> {
        info!("Installing curated packages controller");
        self.controller.enable_curated_packages(ctx)
    }

    fn install_packages(&self, ctx: &Context) -> Result<String> {
        if self.packages_location.trim().is_empty() {
            return Ok(String::new());
        }
        info!(location = %self.packages_location, "Creating curated packages");
        self.handler
            .create_packages(ctx, &self.packages_location, self.kubeconfig.as_deref())
    }
}
