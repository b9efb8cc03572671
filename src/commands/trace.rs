//! `qstep trace` - print every step of a run

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use qstep::cli::{InputArgs, OutputFormat};
use qstep::player::render::render_step_text;
use qstep::trace::{generate, PivotStrategy, StepSequence};
use qstep::Config;

use super::resolve_input;

/// Version of the JSON trace document.
const TRACE_FORMAT_VERSION: u16 = 1;

/// JSON envelope for an exported trace.
#[derive(Serialize)]
struct TraceDocument<'a> {
    version: u16,
    pivot: PivotStrategy,
    input: &'a [i64],
    steps: &'a StepSequence,
}

pub fn handle(args: &InputArgs, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let (values, pivot) = resolve_input(args, &config)?;
    let steps = generate(&values, pivot)?;

    let rendered = match format {
        OutputFormat::Text => render_text(&steps),
        OutputFormat::Json => {
            let doc = TraceDocument {
                version: TRACE_FORMAT_VERSION,
                pivot,
                input: &values,
                steps: &steps,
            };
            let mut json = serde_json::to_string_pretty(&doc)?;
            json.push('\n');
            json
        }
    };

    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => io::stdout().lock().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

/// All steps, separated by blank lines.
fn render_text(steps: &StepSequence) -> String {
    let total = steps.len();
    let mut out = String::new();
    for (index, step) in steps.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&render_step_text(index + 1, total, step));
        out.push('\n');
    }
    out
}
