//! Command-line interface definition
//!
//! Lives in the library so `xtask` can render man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::trace::PivotStrategy;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_SHA"),
    " (",
    env!("QSTEP_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("QSTEP_BUILD_DATE"),
    ")"
);

/// Step through quicksort one comparison at a time.
#[derive(Debug, Parser)]
#[command(
    name = "qstep",
    version = VERSION,
    about = "Record and replay a step-by-step quicksort trace",
    long_about = "Record and replay a step-by-step quicksort trace.\n\n\
                  Every comparison, swap and pivot placement becomes a step you can print \
                  or walk through forwards and backwards."
)]
pub struct Cli {
    /// Increase log output (-v debug, -vv trace). QSTEP_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the full trace of every step
    Trace {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Step through the trace interactively
    Play {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Array and pivot selection shared by `trace` and `play`.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Comma-separated integers, e.g. "64, 34, 25" (defaults to the configured array)
    #[arg(short, long, value_name = "LIST", allow_hyphen_values = true)]
    pub array: Option<String>,

    /// Pivot selection strategy (defaults to the configured strategy)
    #[arg(short, long, value_enum)]
    pub pivot: Option<PivotStrategy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, one block per step
    Text,
    /// JSON document with every step
    Json,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Open the config file in $EDITOR
    Edit,
    /// Add missing fields to the config file
    Migrate {
        /// Apply without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the config file location
    Path,
}
