//! Shell completions command

use std::io;

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use curated_packages::error::Result;

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "curated-packages", &mut io::stdout().lock());
    Ok(())
}
