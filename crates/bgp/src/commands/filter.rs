//! Filter command implementation.
//!
//! Applies a one-shot filter expression to the catalog and prints the
//! matching games.

use bgplanner_core::{GameData, Planner, SortOrder};

use super::{CommandContext, Result};
use crate::output::{format_clauses, format_games_json, format_games_table};

/// Options for the filter command.
#[derive(Debug, Default)]
pub struct FilterOptions {
    /// Comma-separated filter expression.
    pub expression: String,
    /// Sort column (falls back to the configured order).
    pub sort: Option<String>,
    /// Sort descending.
    pub desc: bool,
    /// Limit results.
    pub limit: Option<usize>,
}

/// Picks the sort order for a command: an explicit column wins, otherwise
/// the configured default is used. `desc` forces descending on a known
/// column; an unknown column sorts by name ascending.
pub fn resolve_sort(sort: Option<&str>, desc: bool, default: SortOrder) -> SortOrder {
    match sort {
        Some(column) => {
            if GameData::from_column(column).is_none() {
                tracing::warn!(column, "unknown sort column, sorting by name ascending");
            }
            SortOrder::from_column(column, !desc)
        }
        None if desc => SortOrder::descending(default.field),
        None => default,
    }
}

/// Executes the filter command.
///
/// # Errors
///
/// Returns an error if output serialization fails.
pub fn execute(
    ctx: &CommandContext,
    planner: &mut Planner,
    opts: &FilterOptions,
    default_order: SortOrder,
) -> Result<()> {
    let order = resolve_sort(opts.sort.as_deref(), opts.desc, default_order);
    let rejected: Vec<String> = planner
        .add_filters(&opts.expression)
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut games = planner.current(order);
    if let Some(limit) = opts.limit {
        games.truncate(limit);
    }
    let filters: Vec<String> = planner.active_clauses().map(ToString::to_string).collect();

    if ctx.json_output {
        println!("{}", format_games_json(&games, &filters, &rejected)?);
        return Ok(());
    }

    for reason in &rejected {
        eprintln!("Ignoring clause: {reason}");
    }
    if !ctx.quiet {
        if ctx.verbose {
            print!("{}", format_clauses(&filters));
        }
        print!("{}", format_games_table(&games, ctx.use_colors));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_sort_explicit_column() {
        assert_eq!(
            resolve_sort(Some("rating"), true, SortOrder::default()),
            SortOrder::descending(GameData::Rating)
        );
        assert_eq!(
            resolve_sort(Some("YEAR"), false, SortOrder::descending(GameData::Rank)),
            SortOrder::ascending(GameData::Year)
        );
    }

    #[test]
    fn test_resolve_sort_unknown_column_uses_name() {
        assert_eq!(
            resolve_sort(Some("publisher"), false, SortOrder::descending(GameData::Rank)),
            SortOrder::default()
        );
    }

    #[test]
    fn test_resolve_sort_unknown_column_ignores_desc() {
        assert_eq!(
            resolve_sort(Some("publisher"), true, SortOrder::descending(GameData::Rating)),
            SortOrder::ascending(GameData::Name)
        );
    }

    #[test]
    fn test_resolve_sort_uses_configured_default() {
        let configured = SortOrder::ascending(GameData::Rank);
        assert_eq!(resolve_sort(None, false, configured), configured);
        assert_eq!(
            resolve_sort(None, true, configured),
            SortOrder::descending(GameData::Rank)
        );
    }
}
