//! Test fixtures and in-memory fakes of the external capabilities.
//!
//! Every fake records the calls it receives so tests can assert on the exact
//! sequence of cluster and registry interactions.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{FakeKubectl, sample_bundle, to_json};
//!
//! #[test]
//! fn my_test() {
//!     let kubectl = FakeKubectl::new().respond(&to_json(&sample_bundle()));
//!     // ... exercise code taking `&dyn KubectlRunner`
//!     assert_eq!(kubectl.calls().len(), 1);
//! }
//! ```

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::context::Context;
use crate::domain::{
    BundlePackage, BundlePackageSource, ObjectMeta, PackageBundle, PackageBundleController,
    PackageBundleControllerSpec, PackageBundleSpec, SourceVersion,
};
use crate::error::{PackagesError, Result};
use crate::exec::{ChartInstaller, KubectlCommand, KubectlRunner};
use crate::installer::{PackageController, PackageHandler};
use crate::registry::{BundleManager, RegistryPuller, RegistryRefProvider};

pub const API_VERSION: &str = "packages.eks.amazonaws.com/v1alpha1";
pub const NAMESPACE: &str = "eksa-packages";
pub const CONTROLLER_NAME: &str = "eksa-packages-bundle-controller";
pub const ACTIVE_BUNDLE: &str = "v1-21-1001";

/// Write an executable shell script into `dir`
///
/// # Panics
///
/// Panics if the file cannot be written or made executable.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, content: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
    path
}

fn entry(name: &str, repository: &str, versions: &[&str]) -> BundlePackage {
    BundlePackage {
        name: name.to_string(),
        source: BundlePackageSource {
            registry: "public.ecr.aws/l0g8r8j6".to_string(),
            repository: repository.to_string(),
            versions: versions
                .iter()
                .map(|v| SourceVersion {
                    name: (*v).to_string(),
                    digest: format!("sha256:{v}"),
                })
                .collect(),
        },
    }
}

/// Bundle with `harbor` and `hello-eks-anywhere`
#[must_use]
pub fn sample_bundle() -> PackageBundle {
    PackageBundle {
        api_version: API_VERSION.to_string(),
        kind: "PackageBundle".to_string(),
        metadata: ObjectMeta {
            name: ACTIVE_BUNDLE.to_string(),
            namespace: Some(NAMESPACE.to_string()),
        },
        spec: PackageBundleSpec {
            packages: vec![
                entry("harbor", "harbor/harbor-helm", &["2.5.0", "2.4.2"]),
                entry("hello-eks-anywhere", "hello-eks-anywhere", &["0.1.1"]),
            ],
        },
    }
}

/// Bundle controller pointing at `active_bundle`
#[must_use]
pub fn sample_controller(active_bundle: &str) -> PackageBundleController {
    PackageBundleController {
        api_version: API_VERSION.to_string(),
        kind: "PackageBundleController".to_string(),
        metadata: ObjectMeta {
            name: CONTROLLER_NAME.to_string(),
            namespace: Some(NAMESPACE.to_string()),
        },
        spec: PackageBundleControllerSpec {
            active_bundle: active_bundle.to_string(),
            ..PackageBundleControllerSpec::default()
        },
    }
}

/// Serialize a fixture the way `kubectl -o json` prints it
#[must_use]
pub fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).expect("Failed to serialize fixture")
}

/// Recording kubectl with queued responses
///
/// Responses are consumed in order; once the queue is empty every call
/// succeeds with empty output.
#[derive(Default)]
pub struct FakeKubectl {
    calls: RefCell<Vec<KubectlCommand>>,
    responses: RefCell<VecDeque<Result<Vec<u8>>>>,
}

impl FakeKubectl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn respond(self, output: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(output.as_bytes().to_vec()));
        self
    }

    #[must_use]
    pub fn fail(self, err: PackagesError) -> Self {
        self.responses.borrow_mut().push_back(Err(err));
        self
    }

    pub fn calls(&self) -> Vec<KubectlCommand> {
        self.calls.borrow().clone()
    }

    /// Argument vectors of every call, in order
    pub fn args(&self) -> Vec<Vec<String>> {
        self.calls.borrow().iter().map(KubectlCommand::to_args).collect()
    }
}

impl KubectlRunner for FakeKubectl {
    fn run(&self, ctx: &Context, command: &KubectlCommand) -> Result<Vec<u8>> {
        ctx.check()?;
        self.calls.borrow_mut().push(command.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Puller returning a fixed artifact
pub struct FakePuller {
    data: Vec<u8>,
    pulled: RefCell<Vec<String>>,
}

impl FakePuller {
    #[must_use]
    pub fn returning(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            pulled: RefCell::default(),
        }
    }

    pub fn pulled(&self) -> Vec<String> {
        self.pulled.borrow().clone()
    }
}

impl RegistryPuller for FakePuller {
    fn pull(&self, ctx: &Context, reference: &str) -> Result<Vec<u8>> {
        ctx.check()?;
        self.pulled.borrow_mut().push(reference.to_string());
        Ok(self.data.clone())
    }
}

/// Bundle manager returning a fixed bundle
pub struct FakeBundleManager {
    bundle: PackageBundle,
    requested: RefCell<Vec<String>>,
}

impl FakeBundleManager {
    #[must_use]
    pub fn returning(bundle: PackageBundle) -> Self {
        Self {
            bundle,
            requested: RefCell::default(),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl BundleManager for FakeBundleManager {
    fn latest_bundle(&self, ctx: &Context, base_ref: &str) -> Result<PackageBundle> {
        ctx.check()?;
        self.requested.borrow_mut().push(base_ref.to_string());
        Ok(self.bundle.clone())
    }
}

/// Registry reference provider counting its lookups
pub struct FakeRegistry {
    base_ref: String,
    lookups: RefCell<usize>,
}

impl FakeRegistry {
    #[must_use]
    pub fn new(base_ref: &str) -> Self {
        Self {
            base_ref: base_ref.to_string(),
            lookups: RefCell::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        *self.lookups.borrow()
    }
}

impl RegistryRefProvider for FakeRegistry {
    fn registry_base_ref(&self, ctx: &Context) -> Result<String> {
        ctx.check()?;
        *self.lookups.borrow_mut() += 1;
        Ok(self.base_ref.clone())
    }
}

/// A recorded chart installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartInstall {
    pub oci_uri: String,
    pub kubeconfig: Option<PathBuf>,
    pub name: String,
    pub version: String,
}

/// Chart installer that records installs instead of running helm
#[derive(Default)]
pub struct FakeChartInstaller {
    installed: bool,
    fail_with: Option<String>,
    installs: RefCell<Vec<ChartInstall>>,
}

impl FakeChartInstaller {
    /// Reports the release as present
    #[must_use]
    pub fn already_installed() -> Self {
        Self {
            installed: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn installs(&self) -> Vec<ChartInstall> {
        self.installs.borrow().clone()
    }
}

impl ChartInstaller for FakeChartInstaller {
    fn install_chart_from_name(
        &self,
        ctx: &Context,
        oci_uri: &str,
        kubeconfig: Option<&Path>,
        name: &str,
        version: &str,
    ) -> Result<()> {
        ctx.check()?;
        self.installs.borrow_mut().push(ChartInstall {
            oci_uri: oci_uri.to_string(),
            kubeconfig: kubeconfig.map(Path::to_path_buf),
            name: name.to_string(),
            version: version.to_string(),
        });
        match self.fail_with {
            Some(ref reason) => Err(crate::error::exec::command_failed("helm", reason, "")),
            None => Ok(()),
        }
    }

    fn is_release_installed(&self, _ctx: &Context, _name: &str, _kubeconfig: Option<&Path>) -> bool {
        self.installed
    }
}

/// Package controller capability with a scripted outcome
#[derive(Default)]
pub struct FakePackageController {
    fail_with: Option<String>,
    enabled: RefCell<usize>,
}

impl FakePackageController {
    #[must_use]
    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn enabled(&self) -> usize {
        *self.enabled.borrow()
    }
}

impl PackageController for FakePackageController {
    fn enable_curated_packages(&self, ctx: &Context) -> Result<()> {
        ctx.check()?;
        *self.enabled.borrow_mut() += 1;
        match self.fail_with {
            Some(ref reason) => Err(crate::error::exec::command_failed("helm", reason, "")),
            None => Ok(()),
        }
    }

    fn is_installed(&self, _ctx: &Context) -> bool {
        *self.enabled.borrow() > 0
    }
}

/// Package handler recording the manifest locations it was asked to create
#[derive(Default)]
pub struct FakePackageHandler {
    fail_with: Option<String>,
    created: RefCell<Vec<(String, Option<PathBuf>)>>,
}

impl FakePackageHandler {
    #[must_use]
    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<(String, Option<PathBuf>)> {
        self.created.borrow().clone()
    }
}

impl PackageHandler for FakePackageHandler {
    fn create_packages(
        &self,
        ctx: &Context,
        location: &str,
        kubeconfig: Option<&Path>,
    ) -> Result<String> {
        ctx.check()?;
        self.created
            .borrow_mut()
            .push((location.to_string(), kubeconfig.map(Path::to_path_buf)));
        match self.fail_with {
            Some(ref reason) => Err(crate::error::exec::command_failed("kubectl", reason, "")),
            None => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_kubectl_replays_responses_in_order() {
        let kubectl = FakeKubectl::new()
            .respond("first")
            .fail(PackagesError::Cancelled);
        let ctx = Context::background();

        assert_eq!(
            kubectl.run(&ctx, &KubectlCommand::new(["a"])).unwrap(),
            b"first"
        );
        assert!(kubectl.run(&ctx, &KubectlCommand::new(["b"])).is_err());
        assert!(
            kubectl
                .run(&ctx, &KubectlCommand::new(["c"]))
                .unwrap()
                .is_empty()
        );
        assert_eq!(kubectl.args(), vec![vec!["a"], vec!["b"], vec!["c"]]);
    }

    #[test]
    fn test_sample_bundle_round_trips_through_json() {
        let bundle: PackageBundle = serde_json::from_str(&to_json(&sample_bundle())).unwrap();
        assert_eq!(bundle, sample_bundle());
    }
}
