//! Filter, sort and selection engine for a board game catalog.
//!
//! This crate provides:
//!
//! - [`filter`] - parsing of filter expressions such as `name ~= go, rating >= 8`
//!   into typed predicates
//! - [`Planner`] - progressive filtering and sorting over a fixed set of games
//! - [`GameList`] - a de-duplicated list of chosen games, addressed by name,
//!   1-based index or index range
//! - [`CatalogStore`] - loading the game catalog from a JSON file
//!
//! # Example
//!
//! ```
//! use bgplanner_core::{BoardGame, GameData, GameList, Planner, SortOrder};
//!
//! let mut planner = Planner::new(vec![
//!     BoardGame::new("Go", 1, 2, 5, 30, 30, 8.0, 100, 7.5, 2000),
//!     BoardGame::new("Go Fish", 2, 2, 10, 20, 120, 3.0, 200, 6.5, 2001),
//!     BoardGame::new("Chess", 7, 2, 2, 10, 20, 10.0, 700, 10.0, 2006),
//! ]);
//!
//! let view = planner.filter_with("name ~= go", SortOrder::descending(GameData::Rating));
//! assert_eq!(view[0].name(), "Go");
//!
//! let mut list = GameList::new();
//! list.add("1-2", &view).unwrap();
//! assert_eq!(list.names(), vec!["Go", "Go Fish"]);
//! ```

pub mod catalog;
pub mod filter;
pub mod game_list;
pub mod model;
pub mod planner;
pub mod sort;

pub use catalog::{CatalogError, CatalogResult, CatalogStore};
pub use game_list::{GameList, GameListError, GameListResult, ADD_ALL};
pub use model::{BoardGame, FieldKind, FieldValue, GameData, UnknownColumn};
pub use planner::{AppliedFilter, FilterOutcome, Planner};
pub use sort::{sort_games, SortOrder};
