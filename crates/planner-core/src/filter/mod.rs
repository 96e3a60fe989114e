//! Filter expression parsing and predicates for board game columns.
//!
//! # Syntax
//!
//! A filter expression is one or more clauses separated by `,`:
//!
//! ```text
//! name ~= go, minPlayers >= 2, rating > 7.5
//! ```
//!
//! Each clause is `column operator literal`.
//!
//! ## Columns
//! - `name` - compared as lower-cased text
//! - `rating`, `difficulty` - decimal scores
//! - `rank`, `minPlayers`, `maxPlayers`, `minTime`, `maxTime`, `year` - whole numbers
//!
//! ## Operators
//! - `==`, `!=` - equal, not equal
//! - `~=` - contains (text columns only)
//! - `>`, `>=`, `<`, `<=` - ordering
//!
//! # Example
//!
//! ```
//! use bgplanner_core::filter::{ClauseParser, Predicate};
//! use bgplanner_core::BoardGame;
//!
//! let clause = ClauseParser::parse("name ~= go").unwrap();
//! let predicate = Predicate::build(&clause);
//!
//! let game = BoardGame::new("Go Fish", 2, 2, 10, 20, 120, 3.0, 200, 6.5, 2001);
//! assert!(predicate.matches(&game));
//! ```

mod clause;
mod error;
mod operator;
mod parser;
mod predicate;

pub use clause::Clause;
pub use error::{FilterError, FilterResult};
pub use operator::Operator;
pub use parser::{ClauseParser, CLAUSE_SEPARATOR};
pub use predicate::{Outcome, Predicate};


#[cfg(test)]
mod predicate_tests;
