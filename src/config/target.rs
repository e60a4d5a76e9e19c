//! Cluster addressing shared by every kubectl and helm call

use std::path::{Path, PathBuf};

/// Which cluster and namespace to talk to
///
/// Without a kubeconfig no `--kubeconfig` flag is passed and the tools fall
/// back to their own resolution (`KUBECONFIG`, `~/.kube/config`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterTarget {
    kubeconfig: Option<PathBuf>,
    namespace: String,
}

impl ClusterTarget {
    pub fn new(kubeconfig: Option<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            kubeconfig: kubeconfig.filter(|p| !p.as_os_str().is_empty()),
            namespace: namespace.into(),
        }
    }

    pub fn kubeconfig(&self) -> Option<&Path> {
        self.kubeconfig.as_deref()
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}
