//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod play;
pub mod trace;

use anyhow::Result;
use tracing::debug;

use qstep::cli::InputArgs;
use qstep::trace::{parse_array, PivotStrategy};
use qstep::Config;

/// Array and pivot for one run: CLI flags win over the config file.
pub fn resolve_input(args: &InputArgs, config: &Config) -> Result<(Vec<i64>, PivotStrategy)> {
    let values = match &args.array {
        Some(raw) => parse_array(raw)?,
        None => config.trace.default_array.clone(),
    };
    let pivot = args.pivot.unwrap_or(config.trace.pivot);
    debug!(len = values.len(), %pivot, "resolved input");
    Ok((values, pivot))
}
