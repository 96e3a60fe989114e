//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the bgp CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// bgp - Board game planner: filter a catalog and build a shortlist
#[derive(Parser, Debug)]
#[command(name = "bgp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Catalog file (default: from config, then the XDG data directory)
    #[arg(long, global = true, env = "BGP_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter the catalog with a comma-separated expression
    #[command(alias = "f")]
    Filter {
        /// Filter expression (e.g., "minPlayers>=2, name~=go")
        #[arg(default_value = "")]
        expression: String,

        /// Column to sort on (default: from config, then name)
        #[arg(short, long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(short, long)]
        desc: bool,

        /// Limit results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Interactive session with progressive filters and a game list
    #[command(alias = "sh")]
    Shell,

    /// List the columns that can be filtered and sorted on
    #[command(name = "list-fields", alias = "fields")]
    ListFields,

    /// View and edit configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open config in $EDITOR
    Edit,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
