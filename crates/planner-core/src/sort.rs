//! Ordering of board games by a single column.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::{BoardGame, FieldValue, GameData};

/// A sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: GameData,
    pub ascending: bool,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::ascending(GameData::Name)
    }
}

impl SortOrder {
    pub fn new(field: GameData, ascending: bool) -> Self {
        Self { field, ascending }
    }

    pub fn ascending(field: GameData) -> Self {
        Self::new(field, true)
    }

    pub fn descending(field: GameData) -> Self {
        Self::new(field, false)
    }

    /// Builds an order from a column name, falling back to name ascending
    /// when the column is unknown.
    pub fn from_column(column: &str, ascending: bool) -> Self {
        match GameData::from_column(column) {
            Some(field) => Self::new(field, ascending),
            None => Self::default(),
        }
    }

    /// The same column in the opposite direction.
    pub fn reversed(self) -> Self {
        Self::new(self.field, !self.ascending)
    }

    /// Compares two games.
    ///
    /// Names compare case-insensitively; numbers use [`f64::total_cmp`] so the
    /// order is total even if a score is NaN. Descending reverses the whole
    /// comparison.
    pub fn compare(&self, a: &BoardGame, b: &BoardGame) -> Ordering {
        let ordering = compare_column(self.field, a, b);
        if self.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

fn compare_column(field: GameData, a: &BoardGame, b: &BoardGame) -> Ordering {
    match (field.value(a), field.value(b)) {
        (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(&y),
        (FieldValue::Text(x), FieldValue::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        // A column has a single kind, so mixed values cannot occur.
        _ => Ordering::Equal,
    }
}

/// Sorts games in place. The sort is stable: games with equal keys keep
/// their relative order.
pub fn sort_games(games: &mut [&BoardGame], order: SortOrder) {
    games.sort_by(|a, b| order.compare(a, b));
}
