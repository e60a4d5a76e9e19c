//! Curated packages configuration file (`config.yaml`)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::target::ClusterTarget;
use crate::error::{Result, config};

/// Directory below the user config dir holding `config.yaml`
pub const CONFIG_DIR_NAME: &str = "curated-packages";
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Settings for one invocation
///
/// Every field has a default, so a config file only needs the keys it
/// changes. Unknown keys are rejected to catch typos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackagesConfig {
    /// Namespace holding packages, bundles and the bundle controller
    pub namespace: String,

    /// Name of the singleton bundle controller resource
    pub controller_name: String,

    /// Repository bundles are published to, without tag
    pub registry_base_ref: String,

    pub kubectl: PathBuf,
    pub helm: PathBuf,
    pub oras: PathBuf,

    pub controller_chart: ControllerChart,

    /// Prefix of synthesized package names
    pub name_prefix: String,

    /// Subdirectory generated manifests are written to
    pub output_subdir: String,
}

/// Helm chart of the packages controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerChart {
    /// Chart image, with or without the `oci://` scheme
    pub uri: String,
    pub name: String,
    /// Empty installs the newest chart version
    pub version: String,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            namespace: "eksa-packages".to_string(),
            controller_name: "eksa-packages-bundle-controller".to_string(),
            registry_base_ref: "public.ecr.aws/q0f6t3x4/eksa-package-bundles".to_string(),
            kubectl: PathBuf::from("kubectl"),
            helm: PathBuf::from("helm"),
            oras: PathBuf::from("oras"),
            controller_chart: ControllerChart::default(),
            name_prefix: "my-".to_string(),
            output_subdir: "curated-packages".to_string(),
        }
    }
}

impl Default for ControllerChart {
    fn default() -> Self {
        Self {
            uri: "public.ecr.aws/eks-anywhere/eks-anywhere-packages".to_string(),
            name: "eks-anywhere-packages".to_string(),
            version: String::new(),
        }
    }
}

impl ControllerChart {
    /// Chart location as passed to `helm install`
    pub fn oci_uri(&self) -> String {
        if self.uri.starts_with("oci://") {
            self.uri.clone()
        } else {
            format!("oci://{}", self.uri)
        }
    }
}

impl PackagesConfig {
    /// Parse configuration from YAML; `origin` names the source in errors
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| config::parse_failed(origin, e.to_string()))
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one the file under the user
    /// config directory is used when present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(explicit) => {
                if !explicit.is_file() {
                    return Err(config::not_found(explicit.display().to_string()));
                }
                explicit.to_path_buf()
            }
            None => match default_path().filter(|p| p.is_file()) {
                Some(found) => found,
                None => {
                    debug!("no configuration file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let origin = path.display().to_string();
        debug!(path = %origin, "loading configuration");
        let yaml = fs::read_to_string(&path).map_err(|e| config::read_failed(&origin, e.to_string()))?;
        Self::from_yaml(&yaml, &origin)
    }

    /// Cluster target in this configuration's namespace
    pub fn target(&self, kubeconfig: Option<PathBuf>) -> ClusterTarget {
        ClusterTarget::new(kubeconfig, &self.namespace)
    }
}

/// `<user config dir>/curated-packages/config.yaml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
