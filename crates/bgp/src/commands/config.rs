//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/bgp/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use bgplanner_core::{GameData, SortOrder};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Default destination for `list save`.
pub const DEFAULT_LIST_FILE: &str = "games_list.txt";

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# bgp - Board Game Planner Configuration

# Config schema version (do not modify)
version = 1

# Catalog file (can also use BGP_CATALOG env var or --catalog)
# catalog = "/path/to/games.json"

# Default ordering for filter results
[sort]
# field = "name"            # name, rating, difficulty, rank, minPlayers, maxPlayers, minTime, maxTime, year
# ascending = true

# Output preferences
[output]
# color = true              # Enable colors (respects NO_COLOR env)

# Saved game list
[list]
# path = "games_list.txt"
"#;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Catalog file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Default sort settings.
    #[serde(default)]
    pub sort: SortConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Game list settings.
    #[serde(default)]
    pub list: ListConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            catalog: None,
            sort: SortConfig::default(),
            output: OutputConfig::default(),
            list: ListConfig::default(),
        }
    }
}

impl Config {
    /// The configured default sort order; unknown columns fall back to name.
    pub fn sort_order(&self) -> SortOrder {
        let ascending = self.sort.ascending.unwrap_or(true);
        match self.sort.field.as_deref() {
            Some(field) => SortOrder::from_column(field, ascending),
            None => SortOrder::new(GameData::Name, ascending),
        }
    }

    /// Where `list save` writes when no path is given.
    pub fn list_path(&self) -> PathBuf {
        self.list
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LIST_FILE))
    }
}

/// Sort configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SortConfig {
    /// Column to sort on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascending: Option<bool>,
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Game list configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListConfig {
    /// Default save path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/bgp/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("BGP_CONFIG") {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            return Ok(parent.to_path_buf());
        }
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("bgp"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("bgp"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("BGP_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    migrate_config(config)
}

/// Migrates config to current version if needed.
fn migrate_config(mut config: Config) -> Result<Config> {
    // Version 1 is the initial schema; nothing to migrate yet.
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        if path.exists() {
            println!("Settings:");
            if let Some(ref catalog) = config.catalog {
                println!("  catalog: {}", catalog.display());
            }

            println!("\n[sort]");
            if let Some(ref field) = config.sort.field {
                println!("  field: {}", field);
            }
            if let Some(ascending) = config.sort.ascending {
                println!("  ascending: {}", ascending);
            }

            println!("\n[output]");
            if let Some(color) = config.output.color {
                println!("  color: {}", color);
            }

            println!("\n[list]");
            if let Some(ref list_path) = config.list.path {
                println!("  path: {}", list_path.display());
            }
        } else {
            println!("(No config file exists. Run 'bgp config edit' to create one.)");
        }
    }

    Ok(())
}

/// Executes the config edit command.
pub fn execute_edit(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    if !path.exists() {
        fs::write(&path, DEFAULT_CONFIG)
            .map_err(|e| CommandError::Config(format!("Failed to create config file: {}", e)))?;

        if !ctx.quiet && !ctx.json_output {
            eprintln!("Created default config at: {}", path.display());
        }
    }

    let editor = env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| "vi".to_string());

    tracing::debug!(path = %path.display(), %editor, "opening config in editor");

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| CommandError::Config(format!("Failed to open editor '{}': {}", editor, e)))?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": if status.success() { "success" } else { "error" },
            "editor": editor,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        if status.success() {
            println!("Config saved.");
        } else {
            eprintln!("Editor exited with error");
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    let path = get_config_path()?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Sets one dotted key (e.g. `sort.field`) on a config.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let (section, field) = match key.split_once('.') {
        Some((section, field)) => (Some(section), field),
        None => (None, key),
    };

    match (section, field) {
        (None, "catalog") => {
            config.catalog = Some(PathBuf::from(value));
        }
        (Some("sort"), "field") => {
            let field = GameData::from_column(value).ok_or_else(|| {
                let valid: Vec<&str> = GameData::ALL.iter().map(|f| f.column_name()).collect();
                CommandError::Config(format!(
                    "Invalid sort.field value '{}'. Valid values: {}",
                    value,
                    valid.join(", ")
                ))
            })?;
            config.sort.field = Some(field.column_name().to_string());
        }
        (Some("sort"), "ascending") => {
            config.sort.ascending = Some(parse_bool(value)?);
        }
        (Some("output"), "color") => {
            config.output.color = Some(parse_bool(value)?);
        }
        (Some("list"), "path") => {
            config.list.path = Some(PathBuf::from(value));
        }
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: catalog, sort.field, sort.ascending, output.color, list.path",
                key
            )));
        }
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}
