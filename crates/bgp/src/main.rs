use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands, ConfigCommands};
use commands::config::{load_config, Config, ConfigSetOptions};
use commands::filter::FilterOptions;
use commands::shell::Session;
use commands::{CommandContext, CommandError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins; otherwise `--verbose` shows debug
/// events, `--quiet` only errors, and the default is warnings.
fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(cli: &Cli) -> commands::Result<()> {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            // Unreadable config falls back to defaults.
            tracing::warn!(error = %e, "ignoring unreadable config");
            Config::default()
        }
    };
    let ctx = CommandContext::from_cli(cli, &config);

    let Some(command) = &cli.command else {
        return commands::shell::execute(&ctx, new_session(cli, &config)?);
    };

    match command {
        Commands::Filter {
            expression,
            sort,
            desc,
            limit,
        } => {
            let games = commands::load_games(cli, &config)?;
            let mut planner = bgplanner_core::Planner::new(games);
            let opts = FilterOptions {
                expression: expression.clone(),
                sort: sort.clone(),
                desc: *desc,
                limit: *limit,
            };
            commands::filter::execute(&ctx, &mut planner, &opts, config.sort_order())
        }
        Commands::Shell => commands::shell::execute(&ctx, new_session(cli, &config)?),
        Commands::ListFields => commands::fields::execute(&ctx),
        Commands::Config { command } => match command {
            None | Some(ConfigCommands::Show) => commands::config::execute_show(&ctx),
            Some(ConfigCommands::Edit) => commands::config::execute_edit(&ctx),
            Some(ConfigCommands::Set { key, value }) => {
                let opts = ConfigSetOptions {
                    key: key.clone(),
                    value: value.clone(),
                };
                commands::config::execute_set(&ctx, &opts)
            }
            Some(ConfigCommands::Path) => commands::config::execute_path(&ctx),
        },
        Commands::Completions { shell } => Ok(commands::completions::execute(shell)?),
    }
}

fn new_session(cli: &Cli, config: &Config) -> commands::Result<Session> {
    let games = commands::load_games(cli, config)?;
    Ok(Session::new(games, config.sort_order(), config.list_path()))
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Catalog(_) => "CATALOG_ERROR",
        CommandError::GameList(_) => "LIST_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::GameList(_) => ExitCode::from(1),
        CommandError::Catalog(bgplanner_core::CatalogError::NotFound { .. }) => ExitCode::from(4),
        CommandError::Catalog(_) => ExitCode::from(5),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}
