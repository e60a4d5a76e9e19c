//! Packages controller installed as a helm chart

use std::path::PathBuf;

use tracing::info;

use super::PackageController;
use crate::config::ControllerChart;
use crate::context::Context;
use crate::error::Result;
use crate::exec::ChartInstaller;

/// Installs the packages controller chart unless its release already exists
pub struct HelmPackageController<'a> {
    helm: &'a dyn ChartInstaller,
    chart: &'a ControllerChart,
    kubeconfig: Option<PathBuf>,
}

impl<'a> HelmPackageController<'a> {
    pub fn new(
        helm: &'a dyn ChartInstaller,
        chart: &'a ControllerChart,
        kubeconfig: Option<PathBuf>,
    ) -> Self {
        Self {
            helm,
            chart,
            kubeconfig,
        }
    }
}

impl PackageController for HelmPackageController<'_> {
    fn enable_curated_packages(&self, ctx: &Context) -> Result<()> {
        if self.is_installed(ctx) {
            info!(release = %self.chart.name, "packages controller already installed");
            return Ok(());
        }
        self.helm.install_chart_from_name(
            ctx,
            &self.chart.oci_uri(),
            self.kubeconfig.as_deref(),
            &self.chart.name,
            &self.chart.version,
        )
    }

    fn is_installed(&self, ctx: &Context) -> bool {
        self.helm
            .is_release_installed(ctx, &self.chart.name, self.kubeconfig.as_deref())
    }
}
