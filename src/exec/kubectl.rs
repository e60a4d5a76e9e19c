//! Cluster query/apply capability backed by `kubectl`

use std::path::{Path, PathBuf};

use super::process;
use crate::context::Context;
use crate::error::Result;

/// A single kubectl invocation
///
/// Positional arguments come first; `-o`, `--kubeconfig` and `--namespace`
/// are appended when set. `stdin` carries a manifest for `-f -`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KubectlCommand {
    args: Vec<String>,
    output: Option<String>,
    kubeconfig: Option<PathBuf>,
    namespace: Option<String>,
    stdin: Option<Vec<u8>>,
}

impl KubectlCommand {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn output(mut self, format: impl Into<String>) -> Self {
        self.output = Some(format.into());
        self
    }

    #[must_use]
    pub fn kubeconfig(mut self, path: Option<&Path>) -> Self {
        self.kubeconfig = path.map(Path::to_path_buf);
        self
    }

    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub fn stdin(mut self, manifest: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(manifest.into());
        self
    }

    /// Full argument vector passed to kubectl
    pub fn to_args(&self) -> Vec<String> {
        let mut args = self.args.clone();
        if let Some(ref format) = self.output {
            args.extend(["-o".to_string(), format.clone()]);
        }
        if let Some(ref kubeconfig) = self.kubeconfig {
            args.extend([
                "--kubeconfig".to_string(),
                kubeconfig.display().to_string(),
            ]);
        }
        if let Some(ref namespace) = self.namespace {
            args.extend(["--namespace".to_string(), namespace.clone()]);
        }
        args
    }

    pub fn stdin_bytes(&self) -> Option<&[u8]> {
        self.stdin.as_deref()
    }
}

/// Runs kubectl commands against a cluster
pub trait KubectlRunner {
    /// Execute the command and return its standard output
    fn run(&self, ctx: &Context, command: &KubectlCommand) -> Result<Vec<u8>>;
}

/// kubectl found on `PATH` or at a configured location
#[derive(Debug, Clone)]
pub struct Kubectl {
    binary: PathBuf,
}

impl Kubectl {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl KubectlRunner for Kubectl {
    fn run(&self, ctx: &Context, command: &KubectlCommand) -> Result<Vec<u8>> {
        process::run(ctx, &self.binary, &command.to_args(), command.stdin_bytes())
    }
}
