//! Command implementations for the curated-packages CLI
//!
//! Every command that talks to a cluster builds a [`helpers::Runtime`] from
//! the configuration file and the global `--kubeconfig`. `version` and
//! `completions` run without one.

pub mod apply;
pub mod completions;
pub mod delete;
pub mod describe;
pub mod generate;
pub mod get;
pub mod helpers;
pub mod install;
pub mod list;
pub mod upgrade;
pub mod version;

use crate::cli::{Cli, Commands};
use curated_packages::Result;
use helpers::Runtime;

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        kubeconfig,
        command,
        ..
    } = cli;
    let runtime = || Runtime::load(config.as_deref(), kubeconfig.clone());

    match command {
        Commands::List(target) => list::run(&runtime()?, target),
        Commands::Generate(target) => generate::run(&runtime()?, target),
        Commands::Install(target) => install::run(&runtime()?, target),
        Commands::Get(target) => get::run(&runtime()?, target),
        Commands::Describe(target) => describe::run(&runtime()?, target),
        Commands::Delete(target) => delete::run(&runtime()?, target),
        Commands::Apply(target) => apply::run_apply(&runtime()?, target),
        Commands::Create(target) => apply::run_create(&runtime()?, target),
        Commands::Upgrade(target) => upgrade::run(&runtime()?, target),
        Commands::Version => version::run(),
        Commands::Completions(args) => completions::run(args),
    }
}
