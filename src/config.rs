//! Configuration file handling
//!
//! The config lives at `$QSTEP_CONFIG` when set, otherwise at
//! `<config dir>/qstep/config.toml`. A missing file means defaults; every
//! field is optional so older files keep loading.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item, Table};
use tracing::debug;

use crate::trace::PivotStrategy;
use crate::tui::ThemeName;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "QSTEP_CONFIG";

/// Array sorted when none is given (same as the classic demo input).
pub const DEFAULT_ARRAY: [i64; 10] = [64, 34, 25, 12, 22, 11, 90, 88, 45, 50];

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub trace: TraceConfig,
    pub player: PlayerConfig,
}

/// `[trace]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Pivot strategy used when `--pivot` is not given
    pub pivot: PivotStrategy,
    /// Values sorted when `--array` is not given
    pub default_array: Vec<i64>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            pivot: PivotStrategy::default(),
            default_array: DEFAULT_ARRAY.to_vec(),
        }
    }
}

/// `[player]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub theme: ThemeName,
    /// Open the help overlay when the player starts
    pub show_help: bool,
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("qstep").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the config file, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateResult {
    /// Updated file content (existing formatting and comments preserved)
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that did not exist before
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty() || !self.sections_added.is_empty()
    }
}

/// Add every section and field missing from `existing`, using defaults.
///
/// Values already present are never touched, even if they are invalid.
pub fn migrate_config(existing: &str) -> Result<MigrateResult> {
    let mut doc: DocumentMut = existing.parse().context("Failed to parse config file")?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?
        .parse()
        .context("Failed to build default config")?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            doc.insert(section, Item::Table(Table::new()));
            sections_added.push(section.to_string());
        }
        let Some(table) = doc[section].as_table_mut() else {
            bail!("Config entry '{section}' must be a table");
        };

        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                added_fields.push(format!("{section}.{key}"));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
