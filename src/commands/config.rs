//! Config subcommands handler

use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use qstep::config::migrate_config;
use qstep::tui::theme::ansi;
use qstep::tui::Theme;
use qstep::Config;

/// Show the effective configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = Theme::from_name(config.player.theme);
    print!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print where the config file is (or would be) stored.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;

    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let theme = Theme::default();
    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor '{editor}'"))?;

    // Catch typos right away instead of on the next run
    Config::load()?;
    Ok(())
}

/// Add missing fields to the config file.
///
/// Shows the lines that would be added and asks for confirmation unless
/// `yes` is set. A missing file is created with full defaults.
pub fn handle_migrate(yes: bool) -> Result<()> {
    let theme = Theme::default();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    let content = if file_exists {
        fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("{}", theme.primary_text("Config is already up to date."));
        return Ok(());
    }

    if file_exists {
        println!(
            "{}",
            theme.primary_text(&format!(
                "Found {} missing field(s):",
                result.added_fields.len()
            ))
        );
    } else {
        println!(
            "{}",
            theme.primary_text("Config file does not exist. Will create with default settings.")
        );
    }
    println!();
    print_additions(&result.content, &result.added_fields);
    println!();

    if !yes && !prompt_confirmation(&format!("Write {}?", config_path.display()))? {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, &result.content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("{}", theme.success_text("Config updated successfully."));
    Ok(())
}

/// Print section headers and added `key = value` lines with a `+` prefix.
fn print_additions(new_content: &str, added_fields: &[String]) {
    let added: HashSet<&str> = added_fields.iter().map(String::as_str).collect();
    let color = !qstep::tui::theme::colors_disabled();
    let (start, end) = if color {
        (ansi::GREEN, ansi::RESET)
    } else {
        ("", "")
    };

    let mut section = String::new();
    let mut header_printed = false;
    let mut in_added_value = false;

    for line in new_content.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && trimmed.ends_with(']') && !in_added_value {
            section = trimmed[1..trimmed.len() - 1].to_string();
            header_printed = false;
            continue;
        }

        if in_added_value {
            // Continuation of a multi-line array
            println!("{start}+ {line}{end}");
            in_added_value = !trimmed.starts_with(']');
            continue;
        }

        let Some(eq_pos) = trimmed.find('=') else {
            continue;
        };
        let key = trimmed[..eq_pos].trim();
        if !added.contains(format!("{section}.{key}").as_str()) {
            continue;
        }

        if !header_printed {
            println!("  [{section}]");
            header_printed = true;
        }
        println!("{start}+ {line}{end}");
        in_added_value = trimmed.ends_with('[');
    }
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = Theme::default();

    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
