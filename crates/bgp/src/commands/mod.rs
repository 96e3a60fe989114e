//! Command implementations for the bgp CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod fields;
pub mod filter;
pub mod shell;

use std::path::PathBuf;

use bgplanner_core::{BoardGame, CatalogStore};

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Catalog load error.
    #[error("catalog error: {0}")]
    Catalog(#[from] bgplanner_core::CatalogError),

    /// Game list error.
    #[error("game list error: {0}")]
    GameList(#[from] bgplanner_core::GameListError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and config.
    ///
    /// Colors are on unless `--no-color`, `NO_COLOR`, or `output.color = false`
    /// turns them off.
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some();
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && !no_color_env && config.output.color.unwrap_or(true),
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

/// Resolves the catalog path with priority: flag/env > config > XDG default.
pub fn resolve_catalog_path(cli: &Cli, config: &Config) -> Result<PathBuf> {
    if let Some(path) = &cli.catalog {
        return Ok(path.clone());
    }
    if let Some(path) = &config.catalog {
        return Ok(path.clone());
    }
    Ok(CatalogStore::default_path()?)
}

/// Loads every game from the resolved catalog.
pub fn load_games(cli: &Cli, config: &Config) -> Result<Vec<BoardGame>> {
    let path = resolve_catalog_path(cli, config)?;
    tracing::debug!(path = %path.display(), "loading catalog");
    Ok(CatalogStore::with_path(path).load()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_catalog_flag_wins_over_config() {
        let cli = Cli::parse_from(["bgp", "--catalog", "flag.json", "list-fields"]);
        let config = Config {
            catalog: Some(PathBuf::from("config.json")),
            ..Config::default()
        };
        assert_eq!(
            resolve_catalog_path(&cli, &config).unwrap(),
            PathBuf::from("flag.json")
        );
    }

    #[test]
    fn test_catalog_from_config() {
        let mut cli = Cli::parse_from(["bgp", "list-fields"]);
        cli.catalog = None;
        let config = Config {
            catalog: Some(PathBuf::from("config.json")),
            ..Config::default()
        };
        assert_eq!(
            resolve_catalog_path(&cli, &config).unwrap(),
            PathBuf::from("config.json")
        );
    }

    #[test]
    fn test_config_can_disable_colors() {
        let cli = Cli::parse_from(["bgp", "list-fields"]);
        let mut config = Config::default();
        config.output.color = Some(false);
        assert!(!CommandContext::from_cli(&cli, &config).use_colors);
    }

    #[test]
    fn test_no_color_flag() {
        let cli = Cli::parse_from(["bgp", "--no-color", "--json", "list-fields"]);
        let ctx = CommandContext::from_cli(&cli, &Config::default());
        assert!(!ctx.use_colors);
        assert!(ctx.json_output);
    }
}
