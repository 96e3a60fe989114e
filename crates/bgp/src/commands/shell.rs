//! Interactive shell implementation.
//!
//! Reads one command per line from stdin. Filters accumulate across lines
//! until `reset`, and list indices always refer to the most recently shown
//! view.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use bgplanner_core::{BoardGame, GameList, GameListError, Planner, SortOrder};
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use thiserror::Error;

use super::filter::resolve_sort;
use super::{CommandContext, CommandError, Result};
use crate::output::{
    format_clauses, format_fields_json, format_fields_table, format_game_list_json,
    format_game_list_table, format_games_json, format_games_table,
};

const PROMPT: &str = "bgp> ";

const HELP: &str = "\
Commands:
  filter <expr>             Add clauses, e.g. filter minPlayers>=2, name~=go
  sort <column> [asc|desc]  Change the order of the view
  show                      Show the current view
  filters                   Show the active clauses
  reset                     Drop every clause
  fields                    List filterable columns
  list add <sel>            Add from the view: all, a name, N or N-M
  list remove <sel>         Remove from the list: all, a name, N or N-M
  list show                 Show the list
  list count                Count the listed games
  list clear                Empty the list
  list save [path]          Write the list to a file
  help                      Show this help
  exit                      Leave the shell
";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    Filter(String),
    Sort { column: String, descending: bool },
    Show,
    Filters,
    Reset,
    Fields,
    ListAdd(String),
    ListRemove(String),
    ListShow,
    ListCount,
    ListClear,
    ListSave(Option<PathBuf>),
    Help,
    Exit,
}

/// A shell line that could not be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellParseError {
    /// First word is not a command.
    #[error("unknown command '{0}'. Type 'help' for a list of commands")]
    UnknownCommand(String),

    /// Command needs an argument that was not given.
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    /// Sort direction is neither `asc` nor `desc`.
    #[error("unknown sort direction '{0}'. Use asc or desc")]
    InvalidDirection(String),
}

/// Splits a line into its first word and the trimmed remainder.
fn split_word(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    }
}

/// Parses one shell line.
pub fn parse_command(line: &str) -> std::result::Result<ShellCommand, ShellParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ShellCommand::Empty);
    }

    let (word, rest) = split_word(line);
    let command = match word.to_lowercase().as_str() {
        "filter" | "f" => ShellCommand::Filter(rest.to_string()),
        "sort" => {
            let (column, direction) = split_word(rest);
            if column.is_empty() {
                return Err(ShellParseError::MissingArgument("sort"));
            }
            let descending = match direction.to_lowercase().as_str() {
                "" | "asc" => false,
                "desc" => true,
                _ => return Err(ShellParseError::InvalidDirection(direction.to_string())),
            };
            ShellCommand::Sort {
                column: column.to_string(),
                descending,
            }
        }
        "show" | "ls" => ShellCommand::Show,
        "filters" => ShellCommand::Filters,
        "reset" => ShellCommand::Reset,
        "fields" => ShellCommand::Fields,
        "list" => parse_list_command(rest)?,
        "help" | "?" => ShellCommand::Help,
        "exit" | "quit" | "q" => ShellCommand::Exit,
        _ => return Err(ShellParseError::UnknownCommand(word.to_string())),
    };
    Ok(command)
}

fn parse_list_command(rest: &str) -> std::result::Result<ShellCommand, ShellParseError> {
    let (word, arg) = split_word(rest);
    let command = match word.to_lowercase().as_str() {
        "" | "show" => ShellCommand::ListShow,
        "add" if arg.is_empty() => return Err(ShellParseError::MissingArgument("list add")),
        "add" => ShellCommand::ListAdd(arg.to_string()),
        "remove" | "rm" if arg.is_empty() => {
            return Err(ShellParseError::MissingArgument("list remove"))
        }
        "remove" | "rm" => ShellCommand::ListRemove(arg.to_string()),
        "count" => ShellCommand::ListCount,
        "clear" => ShellCommand::ListClear,
        "save" if arg.is_empty() => ShellCommand::ListSave(None),
        "save" => ShellCommand::ListSave(Some(PathBuf::from(arg))),
        other => return Err(ShellParseError::UnknownCommand(format!("list {other}"))),
    };
    Ok(command)
}

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// State of one shell session.
pub struct Session {
    planner: Planner,
    list: GameList,
    order: SortOrder,
    list_path: PathBuf,
    /// Ask before destructive list operations.
    confirm: bool,
}

impl Session {
    /// Creates a session over the given games.
    pub fn new(games: Vec<BoardGame>, order: SortOrder, list_path: PathBuf) -> Self {
        Self {
            planner: Planner::new(games),
            list: GameList::new(),
            order,
            list_path,
            confirm: false,
        }
    }

    /// Enables confirmation prompts.
    pub fn with_confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }

    pub fn list(&self) -> &GameList {
        &self.list
    }

    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    /// Runs one command, writing its output to `out`.
    ///
    /// # Errors
    ///
    /// List errors are returned so the caller can report them and continue.
    /// Write failures on `out` are returned as I/O errors.
    pub fn run(
        &mut self,
        ctx: &CommandContext,
        command: ShellCommand,
        out: &mut dyn Write,
    ) -> Result<Flow> {
        match command {
            ShellCommand::Empty => {}
            ShellCommand::Filter(expression) => {
                let rejected: Vec<String> = self
                    .planner
                    .add_filters(&expression)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                if !ctx.json_output {
                    for reason in &rejected {
                        writeln!(out, "Ignoring clause: {reason}")?;
                    }
                }
                self.write_view(ctx, out, &rejected)?;
            }
            ShellCommand::Sort { column, descending } => {
                self.order = resolve_sort(Some(column.as_str()), descending, self.order);
                self.write_view(ctx, out, &[])?;
            }
            ShellCommand::Show => self.write_view(ctx, out, &[])?,
            ShellCommand::Filters => {
                let clauses: Vec<String> = self
                    .planner
                    .active_clauses()
                    .map(ToString::to_string)
                    .collect();
                write!(out, "{}", format_clauses(&clauses))?;
            }
            ShellCommand::Reset => {
                self.planner.reset();
                writeln!(out, "Filters cleared ({} games).", self.planner.base_len())?;
            }
            ShellCommand::Fields => {
                if ctx.json_output {
                    writeln!(out, "{}", format_fields_json()?)?;
                } else {
                    write!(out, "{}", format_fields_table(ctx.use_colors))?;
                }
            }
            ShellCommand::ListAdd(selection) => {
                let view = self.planner.current(self.order);
                let added = self.list.add(&selection, &view)?;
                writeln!(out, "Added {added}. List has {}.", self.list.count())?;
            }
            ShellCommand::ListRemove(selection) => {
                let removed = self.list.remove(&selection)?;
                writeln!(out, "Removed {removed}. List has {}.", self.list.count())?;
            }
            ShellCommand::ListShow => {
                let names = self.list.names();
                if ctx.json_output {
                    writeln!(out, "{}", format_game_list_json(&names)?)?;
                } else {
                    write!(out, "{}", format_game_list_table(&names, ctx.use_colors))?;
                }
            }
            ShellCommand::ListCount => writeln!(out, "{}", self.list.count())?,
            ShellCommand::ListClear => {
                if self.list.is_empty() {
                    writeln!(out, "Game list is already empty.")?;
                } else if self.confirm_clear()? {
                    let removed = self.list.count();
                    self.list.clear();
                    writeln!(out, "Removed {removed}. List has 0.")?;
                }
            }
            ShellCommand::ListSave(path) => {
                let path = path.unwrap_or_else(|| self.list_path.clone());
                self.list.save_to_path(&path)?;
                writeln!(
                    out,
                    "Saved {} games to {}.",
                    self.list.count(),
                    path.display()
                )?;
            }
            ShellCommand::Help => write!(out, "{HELP}")?,
            ShellCommand::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Prints the current view. In JSON mode `rejected` goes into the object.
    fn write_view(
        &self,
        ctx: &CommandContext,
        out: &mut dyn Write,
        rejected: &[String],
    ) -> Result<()> {
        let games = self.planner.current(self.order);
        if ctx.json_output {
            let filters: Vec<String> = self
                .planner
                .active_clauses()
                .map(ToString::to_string)
                .collect();
            writeln!(out, "{}", format_games_json(&games, &filters, rejected)?)?;
        } else {
            write!(out, "{}", format_games_table(&games, ctx.use_colors))?;
        }
        Ok(())
    }

    fn confirm_clear(&self) -> Result<bool> {
        if !self.confirm {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(format!("Remove all {} games from the list?", self.list.count()))
            .default(false)
            .interact()
            .map_err(|e| CommandError::Io(io::Error::other(e.to_string())))
    }
}

/// Runs the shell until `exit` or end of input.
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails. Bad commands
/// and list errors are reported and the shell keeps going.
pub fn execute(ctx: &CommandContext, mut session: Session) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    session = session.with_confirm(interactive);

    if interactive && !ctx.quiet {
        let banner = format!(
            "{} games loaded. Type 'help' for commands.",
            session.planner().base_len()
        );
        if ctx.use_colors {
            println!("{}", banner.green());
        } else {
            println!("{banner}");
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(stdout, "{PROMPT}")?;
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match session.run(ctx, command, &mut stdout) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(CommandError::GameList(e)) => report_list_error(ctx, &e),
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(listed = session.list().count(), "shell finished");
    Ok(())
}

fn report_list_error(ctx: &CommandContext, e: &GameListError) {
    if ctx.use_colors {
        eprintln!("{}", e.to_string().red());
    } else {
        eprintln!("{e}");
    }
}
