//! Common test utilities for curated-packages integration tests
//!
//! [`FakeCluster`] writes shell scripts standing in for kubectl and helm plus a
//! configuration file pointing at them, so the real binary can run end to end
//! without a cluster.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const CONTROLLER_JSON: &str = r#"{
  "apiVersion": "packages.eks.amazonaws.com/v1alpha1",
  "kind": "PackageBundleController",
  "metadata": {"name": "eksa-packages-bundle-controller", "namespace": "eksa-packages"},
  "spec": {"activeBundle": "v1-21-1001", "logLevel": 4}
}"#;

pub const BUNDLE_JSON: &str = r#"{
  "apiVersion": "packages.eks.amazonaws.com/v1alpha1",
  "kind": "PackageBundle",
  "metadata": {"name": "v1-21-1001", "namespace": "eksa-packages"},
  "spec": {
    "packages": [
      {
        "name": "harbor",
        "source": {
          "registry": "public.ecr.aws/eks-anywhere",
          "repository": "harbor/harbor-helm",
          "versions": [
            {"name": "2.5.0", "digest": "sha256:2.5.0"},
            {"name": "2.4.2", "digest": "sha256:2.4.2"}
          ]
        }
      },
      {
        "name": "hello-eks-anywhere",
        "source": {
          "registry": "public.ecr.aws/eks-anywhere",
          "repository": "hello-eks-anywhere",
          "versions": [{"name": "0.1.1", "digest": "sha256:0.1.1"}]
        }
      }
    ]
  }
}"#;

/// Fake tool scripts and the configuration that wires them in
pub struct FakeCluster {
    pub temp: TempDir,
    pub config: PathBuf,
}

impl FakeCluster {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path();
        let kubectl = write_script(root, "kubectl", &kubectl_script(root));
        let helm = write_script(root, "helm", &helm_script(root));
        let oras = write_script(root, "oras", &oras_script(root));

        let config = root.join("config.yaml");
        fs::write(
            &config,
            format!(
                "kubectl: '{}'\nhelm: '{}'\noras: '{}'\n",
                kubectl.display(),
                helm.display(),
                oras.display()
            ),
        )
        .expect("Failed to write config");

        Self { temp, config }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// The binary, configured to use the fake tools
    pub fn cmd(&self) -> Command {
        let mut cmd = curated_packages_cmd();
        cmd.env("CURATED_PACKAGES_CONFIG", &self.config);
        cmd
    }

    /// kubectl invocations, one argument line each
    pub fn kubectl_calls(&self) -> Vec<String> {
        read_lines(&self.path().join("kubectl.log"))
    }

    pub fn helm_calls(&self) -> Vec<String> {
        read_lines(&self.path().join("helm.log"))
    }

    pub fn oras_calls(&self) -> Vec<String> {
        read_lines(&self.path().join("oras.log"))
    }

    /// Last manifest kubectl received on stdin
    pub fn stdin_manifest(&self) -> String {
        fs::read_to_string(self.path().join("stdin.yaml")).expect("Failed to read stdin capture")
    }
}

impl Default for FakeCluster {
    fn default() -> Self {
        Self::new()
    }
}

/// The binary with the ambient environment cleared
#[allow(deprecated)]
pub fn curated_packages_cmd() -> Command {
    let mut cmd = Command::cargo_bin("curated-packages").expect("binary should be built");
    cmd.env_remove("KUBECONFIG")
        .env_remove("CURATED_PACKAGES_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

fn kubectl_script(root: &Path) -> String {
    let root = root.display();
    format!(
        r#"#!/bin/sh
printf '%s\n' "$*" >> '{root}/kubectl.log'
case "$1 $2" in
"get packagebundlecontroller")
  cat <<'EOF'
{CONTROLLER_JSON}
EOF
  ;;
"get packagebundle")
  cat <<'EOF'
{BUNDLE_JSON}
EOF
  ;;
"create -f"|"apply -f")
  case "$3" in
  -) cat > '{root}/stdin.yaml'; echo "$1 accepted" ;;
  *fail.yaml) echo "package/my-harbor unchanged"; echo "packages \"my-harbor\" already exists" >&2; exit 1 ;;
  *) echo "package/my-harbor created" ;;
  esac
  ;;
"get packages")
  echo "NAME        PACKAGE   AGE"
  echo "my-harbor   harbor    1m"
  ;;
"delete packages")
  echo "package.packages.eks.amazonaws.com \"$3\" deleted"
  ;;
esac
"#
    )
}

fn helm_script(root: &Path) -> String {
    let root = root.display();
    format!(
        r#"#!/bin/sh
printf '%s\n' "$*" >> '{root}/helm.log'
case "$1" in
status) exit 1 ;;
esac
"#
    )
}

fn oras_script(root: &Path) -> String {
    let root = root.display();
    format!(
        r#"#!/bin/sh
printf '%s\n' "$*" >> '{root}/oras.log'
cat > "$4/bundle.yaml" <<'EOF'
{BUNDLE_JSON}
EOF
"#
    )
}

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, content: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
    path
}

#[cfg(not(unix))]
fn write_script(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write script");
    path
}
