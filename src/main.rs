//! curated-packages - curated package management for Kubernetes clusters
//!
//! Reads the active package bundle from a cluster or a registry, and creates,
//! inspects and removes the packages it describes.

use std::fmt::Write as _;

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;

use cli::Cli;
use curated_packages::PackagesError;

/// Render a failed command: its captured output, the error, then any hint
fn report(e: &PackagesError) -> String {
    let mut message = format!("Error: {e}");
    if let Some(help) = e.help() {
        let _ = write!(message, "\n  help: {help}");
    }
    message
}

fn main() {
    let cli = Cli::parse();
    curated_packages::logging::init(cli.verbose);

    if let Err(e) = commands::run(cli) {
        if let Some(output) = e.output() {
            print!("{output}");
        }
        eprintln!("{}", report(&e));
        std::process::exit(1);
    }
}
