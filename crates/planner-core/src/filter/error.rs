//! Error types for the filter clause parser.

use thiserror::Error;

/// A specialized Result type for filter parsing operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while parsing a single filter clause.
///
/// None of these are fatal to a filter call: the planner drops the offending
/// clause and keeps the rest.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The clause is empty or only whitespace.
    #[error("filter clause is empty")]
    EmptyClause,

    /// No comparison operator was found in the clause.
    #[error("no operator found in '{clause}' (expected one of ==, !=, ~=, >=, <=, >, <)")]
    MissingOperator {
        /// The clause as written.
        clause: String,
    },

    /// Splitting on the operator did not yield exactly a column and a value.
    #[error("malformed clause '{clause}' (expected <column><operator><value>)")]
    MalformedClause {
        /// The clause as written.
        clause: String,
    },

    /// The left-hand side does not name a known column.
    #[error("unknown column '{field}'{}", suggestion_suffix(.suggestion))]
    UnknownField {
        /// The column name as written.
        field: String,
        /// The closest known column name, if one is close enough.
        suggestion: Option<String>,
    },
}

impl FilterError {
    /// Creates a missing operator error.
    pub fn missing_operator(clause: impl Into<String>) -> Self {
        FilterError::MissingOperator {
            clause: clause.into(),
        }
    }

    /// Creates a malformed clause error.
    pub fn malformed(clause: impl Into<String>) -> Self {
        FilterError::MalformedClause {
            clause: clause.into(),
        }
    }

    /// Creates an unknown field error.
    pub fn unknown_field(field: impl Into<String>, suggestion: Option<String>) -> Self {
        FilterError::UnknownField {
            field: field.into(),
            suggestion,
        }
    }
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(". Did you mean '{s}'?"),
        None => String::new(),
    }
}
