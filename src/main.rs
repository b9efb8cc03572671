//! qstep command-line entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use qstep::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Trace {
            input,
            format,
            output,
        } => commands::trace::handle(&input, format, output.as_deref()),
        Commands::Play { input } => commands::play::handle(&input),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

/// Log to stderr so stdout stays clean for trace output.
///
/// `QSTEP_LOG` takes precedence; otherwise `-v` raises the level from `warn`.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("QSTEP_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
