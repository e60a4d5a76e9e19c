//! Package lifecycle against a cluster

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::BatchOutcome;
use super::display::write_package_table;
use crate::config::ClusterTarget;
use crate::context::Context;
use crate::domain::{BundlePackage, Package};
use crate::error::{Result, exec, fs as fs_error};
use crate::exec::{KubectlCommand, KubectlRunner};
use crate::installer::PackageHandler;

/// Stateful client for package resources
///
/// Cluster operations return the command's standard output. When kubectl
/// fails, the output it printed travels inside the error
/// (see [`PackagesError::output`](crate::error::PackagesError::output)).
pub struct PackageClient<'a> {
    kubectl: &'a dyn KubectlRunner,
    target: &'a ClusterTarget,
    output_subdir: String,
}

impl<'a> PackageClient<'a> {
    pub fn new(
        kubectl: &'a dyn KubectlRunner,
        target: &'a ClusterTarget,
        output_subdir: impl Into<String>,
    ) -> Self {
        Self {
            kubectl,
            target,
            output_subdir: output_subdir.into(),
        }
    }

    fn run(&self, ctx: &Context, command: KubectlCommand) -> Result<String> {
        let out = self
            .kubectl
            .run(ctx, &command.kubeconfig(self.target.kubeconfig()))?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Create one package from its rendered manifest
    ///
    /// An existing package of the same name is reported as a failure, never
    /// overwritten.
    pub fn install(&self, ctx: &Context, package: &Package) -> Result<String> {
        let manifest = package.to_manifest()?;
        debug!(package = package.display_name(), "creating package");
        self.run(ctx, KubectlCommand::new(["create", "-f", "-"]).stdin(manifest))
    }

    /// `kubectl apply -f <file>`
    pub fn apply_manifest_file(&self, ctx: &Context, file: &Path) -> Result<String> {
        self.run(ctx, manifest_file_command("apply", file))
    }

    /// `kubectl create -f <file>`
    pub fn create_manifest_file(&self, ctx: &Context, file: &Path) -> Result<String> {
        self.run(ctx, manifest_file_command("create", file))
    }

    pub fn delete<S: AsRef<str>>(&self, ctx: &Context, names: &[S]) -> Result<String> {
        self.run(ctx, self.packages_command("delete", names))
    }

    /// Describe installed packages; an empty answer is "no resources found"
    pub fn describe<S: AsRef<str>>(&self, ctx: &Context, names: &[S]) -> Result<String> {
        let out = self.run(ctx, self.packages_command("describe", names))?;
        self.non_empty(out)
    }

    /// List installed packages, optionally as `json` or `yaml`
    pub fn get<S: AsRef<str>>(
        &self,
        ctx: &Context,
        names: &[S],
        output: Option<&str>,
    ) -> Result<String> {
        let mut command = self.packages_command("get", names);
        if let Some(format) = output.filter(|f| !f.is_empty()) {
            command = command.output(format);
        }
        let out = self.run(ctx, command)?;
        self.non_empty(out)
    }

    fn packages_command<S: AsRef<str>>(&self, verb: &str, names: &[S]) -> KubectlCommand {
        KubectlCommand::new([verb, "packages"])
            .args(names.iter().map(|n| n.as_ref().to_string()))
            .namespace(self.target.namespace())
    }

    fn non_empty(&self, out: String) -> Result<String> {
        if out.is_empty() {
            return Err(exec::no_resources_found(self.target.namespace()));
        }
        Ok(out)
    }

    /// Write each package to `<dest>/<output_subdir>/<display name>.yaml`
    ///
    /// The directory is created when missing. A package that cannot be
    /// rendered or written is logged and skipped.
    pub fn render_to_files(
        &self,
        packages: &[Package],
        dest: &Path,
    ) -> Result<BatchOutcome<PathBuf>> {
        let directory = dest.join(&self.output_subdir);
        fs::create_dir_all(&directory).map_err(|e| {
            fs_error::create_dir_failed(directory.display().to_string(), e.to_string())
        })?;

        let mut outcome = BatchOutcome::default();
        for package in packages {
            match write_package(&directory, package) {
                Ok(file) => {
                    debug!(file = %file.display(), "wrote package manifest");
                    outcome.succeeded.push(file);
                }
                Err(e) => {
                    warn!(package = package.display_name(), "skipping package: {e}");
                    outcome
                        .failed
                        .push((package.display_name().to_string(), e));
                }
            }
        }
        Ok(outcome)
    }

    /// Write all packages as one multi-document YAML stream
    pub fn render_to_writer<W: Write>(&self, packages: &[Package], out: &mut W) -> Result<()> {
        for (i, package) in packages.iter().enumerate() {
            if i > 0 {
                out.write_all(b"---\n")?;
            }
            out.write_all(package.to_manifest()?.as_bytes())?;
        }
        Ok(())
    }

    /// Show the package/version table
    pub fn list_display<W: Write>(&self, packages: &[BundlePackage], out: &mut W) -> Result<()> {
        write_package_table(out, packages)?;
        Ok(())
    }
}

fn manifest_file_command(verb: &str, file: &Path) -> KubectlCommand {
    KubectlCommand::new([verb, "-f"]).args([file.display().to_string()])
}

fn write_package(directory: &Path, package: &Package) -> Result<PathBuf> {
    let manifest = package.to_manifest()?;
    let file = directory.join(format!("{}.yaml", package.display_name()));
    fs::write(&file, manifest)
        .map_err(|e| fs_error::write_failed(file.display().to_string(), e.to_string()))?;
    Ok(file)
}

impl PackageHandler for PackageClient<'_> {
    fn create_packages(
        &self,
        ctx: &Context,
        location: &str,
        kubeconfig: Option<&Path>,
    ) -> Result<String> {
        let command = manifest_file_command("create", Path::new(location));
        let out = self.kubectl.run(ctx, &command.kubeconfig(kubeconfig))?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
