//! Parser for filter clauses.

use strsim::levenshtein;

use super::clause::Clause;
use super::error::{FilterError, FilterResult};
use super::operator::Operator;
use crate::model::GameData;

/// Separator between clauses in a filter expression.
pub const CLAUSE_SEPARATOR: char = ',';

/// Maximum Levenshtein distance to consider a column name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Parser for filter expressions.
///
/// # Grammar
///
/// ```text
/// expression ::= clause ("," clause)*
/// clause     ::= column operator literal
/// operator   ::= "==" | "!=" | "~=" | ">=" | "<=" | ">" | "<"
/// ```
///
/// Columns are matched case-insensitively; column and literal are trimmed.
///
/// # Example
///
/// ```
/// use bgplanner_core::filter::{ClauseParser, Operator};
/// use bgplanner_core::GameData;
///
/// let clause = ClauseParser::parse("minPlayers >= 3").unwrap();
/// assert_eq!(clause.field, GameData::MinPlayers);
/// assert_eq!(clause.operator, Operator::GreaterOrEqual);
/// assert_eq!(clause.literal, "3");
/// ```
pub struct ClauseParser;

impl ClauseParser {
    /// Parses a single clause.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::EmptyClause` if the input is blank,
    /// `FilterError::MissingOperator` if no operator token occurs in it,
    /// `FilterError::MalformedClause` if splitting on the operator does not
    /// leave exactly a non-empty column and a non-empty literal, and
    /// `FilterError::UnknownField` if the column is not recognised.
    pub fn parse(input: &str) -> FilterResult<Clause> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(FilterError::EmptyClause);
        }

        let operator =
            Operator::detect(trimmed).ok_or_else(|| FilterError::missing_operator(trimmed))?;

        let parts: Vec<&str> = trimmed.split(operator.token()).map(str::trim).collect();
        let [column, literal] = parts.as_slice() else {
            return Err(FilterError::malformed(trimmed));
        };
        if column.is_empty() || literal.is_empty() {
            return Err(FilterError::malformed(trimmed));
        }

        let field = GameData::from_column(column)
            .ok_or_else(|| FilterError::unknown_field(*column, suggest_column(column)))?;

        Ok(Clause::new(field, operator, *literal))
    }

    /// Splits an expression on `,` and parses every clause.
    ///
    /// Results are returned in input order so callers can report which
    /// clauses were dropped.
    pub fn parse_all(expression: &str) -> Vec<FilterResult<Clause>> {
        expression.split(CLAUSE_SEPARATOR).map(Self::parse).collect()
    }
}

/// Finds the closest known column name for a misspelt one.
fn suggest_column(column: &str) -> Option<String> {
    let query = column.to_lowercase();

    let (best, distance) = GameData::ALL
        .iter()
        .map(|field| {
            let name = field.column_name();
            (name, levenshtein(&query, &name.to_lowercase()))
        })
        .min_by_key(|(_, d)| *d)?;

    if distance > 0 && distance <= MAX_SUGGESTION_DISTANCE {
        Some(best.to_string())
    } else {
        None
    }
}
