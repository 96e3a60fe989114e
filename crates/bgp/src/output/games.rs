//! Game output formatting.

use bgplanner_core::{BoardGame, FieldKind, GameData};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_header, format_range, format_rating, format_score, truncate_str};

/// Widest name shown in the results table.
const NAME_WIDTH: usize = 32;

/// JSON output structure for filter results.
#[derive(Serialize)]
pub struct GamesOutput<'a> {
    pub count: usize,
    pub filters: &'a [String],
    #[serde(skip_serializing_if = "is_empty")]
    pub rejected: &'a [String],
    pub games: Vec<GameOutput<'a>>,
}

/// JSON output structure for a single game.
#[derive(Serialize)]
pub struct GameOutput<'a> {
    /// 1-based position, usable with `list add`.
    pub index: usize,
    #[serde(flatten)]
    pub game: &'a BoardGame,
}

fn is_empty(items: &&[String]) -> bool {
    items.is_empty()
}

/// Formats filter results as JSON.
pub fn format_games_json(
    games: &[&BoardGame],
    filters: &[String],
    rejected: &[String],
) -> Result<String, serde_json::Error> {
    let output = GamesOutput {
        count: games.len(),
        filters,
        rejected,
        games: games
            .iter()
            .enumerate()
            .map(|(i, &game)| GameOutput {
                index: i + 1,
                game,
            })
            .collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats filter results as a table with 1-based indices.
pub fn format_games_table(games: &[&BoardGame], use_colors: bool) -> String {
    if games.is_empty() {
        return "No games found.\n".to_string();
    }

    let mut output = String::new();

    let header = format!(
        "{:>4}  {:<width$} {:>7} {:>9} {:>6} {:>6} {:>6} {:>6}",
        "#",
        "Name",
        "Players",
        "Time",
        "Diff",
        "Rating",
        "Rank",
        "Year",
        width = NAME_WIDTH
    );
    output.push_str(&format_header(&header, use_colors));

    for (i, game) in games.iter().enumerate() {
        let index = format!("{:>4}", i + 1);
        let index = if use_colors {
            index.cyan().to_string()
        } else {
            index
        };
        // Pad before coloring so escape codes do not skew the column.
        let rating = format_rating(game.rating(), use_colors);
        let rating_pad = " ".repeat(6usize.saturating_sub(format_score(game.rating()).len()));

        let line = format!(
            "{}  {:<width$} {:>7} {:>9} {:>6} {}{} {:>6} {:>6}",
            index,
            truncate_str(game.name(), NAME_WIDTH),
            format_range(game.min_players(), game.max_players()),
            format_range(game.min_play_time(), game.max_play_time()),
            format_score(game.difficulty()),
            rating_pad,
            rating,
            game.rank(),
            game.year_published(),
            width = NAME_WIDTH,
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Formats the active clause list on one line.
pub fn format_clauses(clauses: &[String]) -> String {
    if clauses.is_empty() {
        "No active filters.\n".to_string()
    } else {
        format!("Active filters: {}\n", clauses.join(", "))
    }
}

/// JSON output structure for the game list.
#[derive(Serialize)]
pub struct GameListOutput<'a> {
    pub count: usize,
    pub games: &'a [String],
}

/// Formats the game list as JSON.
pub fn format_game_list_json(names: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&GameListOutput {
        count: names.len(),
        games: names,
    })
}

/// Formats the game list as a numbered list.
pub fn format_game_list_table(names: &[String], use_colors: bool) -> String {
    if names.is_empty() {
        return "Game list is empty.\n".to_string();
    }

    let mut output = format_header(&format!("Game list ({})", names.len()), use_colors);
    for (i, name) in names.iter().enumerate() {
        output.push_str(&format!("{:>4}  {}\n", i + 1, name));
    }
    output
}

/// JSON output structure for a filterable column.
#[derive(Serialize)]
pub struct FieldOutput {
    pub column: &'static str,
    pub kind: &'static str,
    pub operators: &'static str,
}

fn field_summary(field: GameData) -> FieldOutput {
    let (kind, operators) = match field.kind() {
        FieldKind::Text => ("text", "== != ~= > >= < <="),
        FieldKind::Number => ("number", "== != > >= < <="),
    };
    FieldOutput {
        column: field.column_name(),
        kind,
        operators,
    }
}

/// Formats the column list as JSON.
pub fn format_fields_json() -> Result<String, serde_json::Error> {
    let fields: Vec<FieldOutput> = GameData::ALL.into_iter().map(field_summary).collect();
    serde_json::to_string_pretty(&fields)
}

/// Formats the column list as a table.
pub fn format_fields_table(use_colors: bool) -> String {
    let header = format!("{:<12} {:<8} {}", "Column", "Kind", "Operators");
    let mut output = format_header(&header, use_colors);
    for field in GameData::ALL {
        let summary = field_summary(field);
        output.push_str(&format!(
            "{:<12} {:<8} {}\n",
            summary.column, summary.kind, summary.operators
        ));
    }
    output
}
