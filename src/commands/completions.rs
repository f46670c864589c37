//! Shell completion generation.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use html_extractor::cli::Cli;

/// Write a completion script for `shell` to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
