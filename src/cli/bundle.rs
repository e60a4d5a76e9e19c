use clap::Args;

use curated_packages::source::{BundleSource, KubeVersion};

/// Flags selecting where the package bundle comes from
#[derive(Args, Debug, Clone)]
pub struct BundleArgs {
    /// Location to find curated packages (cluster, registry)
    #[arg(long, value_name = "SOURCE")]
    pub source: BundleSource,

    /// Kubernetes version of the cluster, as <major>.<minor>; required for --source registry
    #[arg(long = "kube-version", alias = "kubeversion", value_name = "VERSION")]
    pub kube_version: Option<KubeVersion>,

    /// Registry host to pull bundles from instead of the configured one
    #[arg(long, value_name = "HOST")]
    pub registry: Option<String>,
}
