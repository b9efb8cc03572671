//! Developer tasks for qstep.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Developer tasks for qstep")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages from the CLI definition
    Man {
        /// Output directory for the generated pages
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

/// Render `qstep.1` plus one page per subcommand.
fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = qstep::cli::Cli::command();
    write_page(out_dir, "qstep", cmd.clone())?;

    for sub in cmd.get_subcommands() {
        let name = format!("qstep-{}", sub.get_name());
        write_page(out_dir, &name, sub.clone())?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn write_page(out_dir: &Path, name: &str, cmd: clap::Command) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    let path = out_dir.join(format!("{name}.1"));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
