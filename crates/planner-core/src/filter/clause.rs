//! A parsed filter clause.

use std::fmt;

use super::operator::Operator;
use crate::model::GameData;

/// One `column operator literal` unit of a filter expression.
///
/// The literal is kept as written (trimmed); it is interpreted by the
/// predicate builder according to the column's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub field: GameData,
    pub operator: Operator,
    pub literal: String,
}

impl Clause {
    /// Creates a clause from its parts.
    pub fn new(field: GameData, operator: Operator, literal: impl Into<String>) -> Self {
        Self {
            field,
            operator,
            literal: literal.into(),
        }
    }
}

/// Renders the canonical form, e.g. `minPlayers>=3`.
impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.operator, self.literal)
    }
}
