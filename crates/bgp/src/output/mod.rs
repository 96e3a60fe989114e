//! Output formatting utilities for the bgp CLI.
//!
//! This module provides functions for formatting data as tables or JSON:
//!
//! - [`games`] - Filter results, active clauses, and the game list
//! - [`helpers`] - Common formatting utilities (truncation, scores, ranges)

mod games;
pub mod helpers;

pub use games::{
    format_clauses, format_fields_json, format_fields_table, format_game_list_json,
    format_game_list_table, format_games_json, format_games_table,
};
