//! `qstep completions` - shell completion scripts

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use qstep::cli::Cli;

pub fn handle(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "qstep", &mut io::stdout());
    Ok(())
}
