//! Progressive filtering and sorting over a fixed set of games.
//!
//! The [`Planner`] owns the base set of games and the list of clauses
//! accepted so far. Every query re-applies the whole clause list to the base
//! set and sorts the result, so a view depends only on the clause history and
//! the requested order.
//!
//! Filters accumulate: `filter("minPlayers>=2")` followed by
//! `filter("rating>7")` returns games matching both. An empty expression adds
//! nothing and simply returns the current view, optionally in a new order.
//! [`Planner::reset`] drops every clause.
//!
//! # Example
//!
//! ```
//! use bgplanner_core::{BoardGame, GameData, Planner, SortOrder};
//!
//! let mut planner = Planner::new(vec![
//!     BoardGame::new("Go", 1, 2, 5, 30, 30, 8.0, 100, 7.5, 2000),
//!     BoardGame::new("Chess", 7, 2, 2, 10, 20, 10.0, 700, 10.0, 2006),
//!     BoardGame::new("Monopoly", 8, 6, 10, 20, 1000, 1.0, 800, 5.0, 2007),
//! ]);
//!
//! let view = planner.filter("minPlayers<=2");
//! assert_eq!(view.len(), 2);
//!
//! // Narrow further and sort by rating, highest first
//! let view = planner.filter_with("year>2000", SortOrder::descending(GameData::Rating));
//! assert_eq!(view[0].name(), "Chess");
//! ```

use tracing::debug;

use crate::filter::{Clause, ClauseParser, FilterError, Predicate};
use crate::model::{BoardGame, GameData};
use crate::sort::{sort_games, SortOrder};

/// A clause the planner accepted, with the predicate built from it.
#[derive(Debug, Clone)]
pub struct AppliedFilter {
    clause: Clause,
    predicate: Predicate,
}

impl AppliedFilter {
    fn new(clause: Clause) -> Self {
        let predicate = Predicate::build(&clause);
        Self { clause, predicate }
    }

    pub fn clause(&self) -> &Clause {
        &self.clause
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

/// Result of a filter call that also reports dropped clauses.
#[derive(Debug)]
pub struct FilterOutcome<'a> {
    /// The sorted view.
    pub games: Vec<&'a BoardGame>,
    /// Why each dropped clause of this call was dropped, in input order.
    pub rejected: Vec<FilterError>,
}

/// Filter engine over an immutable base set of games.
#[derive(Debug, Clone)]
pub struct Planner {
    games: Vec<BoardGame>,
    filters: Vec<AppliedFilter>,
}

impl Planner {
    /// Creates a planner over the given games.
    pub fn new(games: impl IntoIterator<Item = BoardGame>) -> Self {
        Self {
            games: games.into_iter().collect(),
            filters: Vec::new(),
        }
    }

    /// Filters and sorts by name, ascending.
    pub fn filter(&mut self, expression: &str) -> Vec<&BoardGame> {
        self.filter_with(expression, SortOrder::default())
    }

    /// Filters and sorts by the given column, ascending.
    pub fn filter_sorted(&mut self, expression: &str, sort_on: GameData) -> Vec<&BoardGame> {
        self.filter_with(expression, SortOrder::ascending(sort_on))
    }

    /// Adds the clauses of `expression` to the accumulated filter, then
    /// returns the matching games in the given order.
    ///
    /// Clauses that do not parse are dropped; the rest still apply.
    pub fn filter_with(&mut self, expression: &str, order: SortOrder) -> Vec<&BoardGame> {
        self.filter_report(expression, order).games
    }

    /// Like [`Planner::filter_with`], also reporting which clauses were dropped.
    pub fn filter_report(&mut self, expression: &str, order: SortOrder) -> FilterOutcome<'_> {
        let rejected = self.add_filters(expression);
        FilterOutcome {
            games: self.current(order),
            rejected,
        }
    }

    /// Returns the current view without adding any clause.
    pub fn current(&self, order: SortOrder) -> Vec<&BoardGame> {
        let mut view: Vec<&BoardGame> = self
            .games
            .iter()
            .filter(|game| self.filters.iter().all(|f| f.predicate.matches(game)))
            .collect();
        sort_games(&mut view, order);

        debug!(
            matched = view.len(),
            total = self.games.len(),
            clauses = self.filters.len(),
            sort = %order.field,
            ascending = order.ascending,
            "planner view"
        );
        view
    }

    /// Drops every accumulated clause.
    pub fn reset(&mut self) {
        debug!(dropped = self.filters.len(), "planner reset");
        self.filters.clear();
    }

    /// The accumulated filters, oldest first.
    pub fn filters(&self) -> &[AppliedFilter] {
        &self.filters
    }

    /// The accumulated clauses, oldest first.
    pub fn active_clauses(&self) -> impl Iterator<Item = &Clause> {
        self.filters.iter().map(AppliedFilter::clause)
    }

    /// The base set, in the order it was supplied.
    pub fn games(&self) -> &[BoardGame] {
        &self.games
    }

    /// Number of games in the base set.
    pub fn base_len(&self) -> usize {
        self.games.len()
    }

    /// Parses an expression and appends every clause that parses, without
    /// building a view. Returns the errors for the clauses that were dropped.
    pub fn add_filters(&mut self, expression: &str) -> Vec<FilterError> {
        if expression.trim().is_empty() {
            return Vec::new();
        }

        let mut rejected = Vec::new();
        for result in ClauseParser::parse_all(expression) {
            match result {
                Ok(clause) => {
                    debug!(%clause, "clause added");
                    self.filters.push(AppliedFilter::new(clause));
                }
                Err(e) => {
                    debug!(error = %e, "clause dropped");
                    rejected.push(e);
                }
            }
        }
        rejected
    }
}

#[cfg(test)]
mod tests;
