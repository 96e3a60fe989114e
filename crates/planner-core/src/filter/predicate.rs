//! Typed predicates built from parsed clauses.
//!
//! A [`Predicate`] is closed over one clause: text columns compare the
//! lower-cased name, numeric columns compare against a literal parsed once at
//! build time. Building never fails; a clause that cannot be honoured turns
//! into one of two explicit fallbacks:
//!
//! - [`Predicate::RejectAll`] when a numeric literal does not parse, so a typo
//!   in a filter never lets unintended games through.
//! - [`Predicate::Unsupported`] when the operator has no meaning for the column
//!   (`~=` on a number), which accepts every game.

use tracing::debug;

use super::clause::Clause;
use super::operator::Operator;
use crate::model::{BoardGame, FieldKind, FieldValue, GameData};

/// What a predicate does to a record set, independent of any particular game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The predicate tests each game.
    Filtering,
    /// The predicate rejects every game.
    RejectAll,
    /// The predicate accepts every game.
    AcceptAll,
}

/// A test over a single board game.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive comparison of a text column.
    Text {
        field: GameData,
        op: Operator,
        /// The literal, lower-cased.
        needle: String,
    },

    /// IEEE-754 comparison of a numeric column.
    Number {
        field: GameData,
        op: Operator,
        value: f64,
    },

    /// The numeric literal could not be parsed.
    RejectAll { field: GameData, literal: String },

    /// The operator is not supported for this column.
    Unsupported { field: GameData, op: Operator },
}

impl Predicate {
    /// Builds the predicate for a clause.
    pub fn build(clause: &Clause) -> Self {
        let Clause {
            field,
            operator,
            literal,
        } = clause;

        match field.kind() {
            FieldKind::Text => Predicate::Text {
                field: *field,
                op: *operator,
                needle: literal.to_lowercase(),
            },
            FieldKind::Number => {
                let Ok(value) = literal.parse::<f64>() else {
                    debug!(%clause, "numeric literal does not parse, clause rejects every game");
                    return Predicate::RejectAll {
                        field: *field,
                        literal: literal.clone(),
                    };
                };
                if !operator.is_ordering() {
                    debug!(%clause, "operator unsupported for numeric column, clause accepts every game");
                    return Predicate::Unsupported {
                        field: *field,
                        op: *operator,
                    };
                }
                Predicate::Number {
                    field: *field,
                    op: *operator,
                    value,
                }
            }
        }
    }

    /// Returns the effect of this predicate on a record set.
    pub fn outcome(&self) -> Outcome {
        match self {
            Predicate::Text { .. } | Predicate::Number { .. } => Outcome::Filtering,
            Predicate::RejectAll { .. } => Outcome::RejectAll,
            Predicate::Unsupported { .. } => Outcome::AcceptAll,
        }
    }

    /// The column this predicate reads.
    pub fn field(&self) -> GameData {
        match self {
            Predicate::Text { field, .. }
            | Predicate::Number { field, .. }
            | Predicate::RejectAll { field, .. }
            | Predicate::Unsupported { field, .. } => *field,
        }
    }

    /// Tests a game against this predicate.
    pub fn matches(&self, game: &BoardGame) -> bool {
        match self {
            Predicate::Text { field, op, needle } => match field.value(game) {
                FieldValue::Text(text) => matches_text(&text.to_lowercase(), *op, needle),
                FieldValue::Number(_) => false,
            },
            Predicate::Number { field, op, value } => field
                .number(game)
                .is_some_and(|actual| op.accepts(actual.partial_cmp(value))),
            Predicate::RejectAll { .. } => false,
            Predicate::Unsupported { .. } => true,
        }
    }
}

fn matches_text(actual: &str, op: Operator, needle: &str) -> bool {
    match op {
        Operator::Contains => actual.contains(needle),
        _ => op.accepts(Some(actual.cmp(needle))),
    }
}
