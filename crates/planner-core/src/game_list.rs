//! A user-curated list of games.
//!
//! Games are added from a candidate sequence (normally the planner's latest
//! view) and removed from the list's own name-sorted view. Both operations
//! accept the same input forms:
//!
//! - `all` (any case) - every candidate / every listed game
//! - a game name (any case) - that game
//! - `N` - the game at 1-based position `N`
//! - `N-M` - the games at positions `N` through `M`; `M` is clamped to the
//!   length of the sequence
//!
//! Names are de-duplicated case-insensitively; the first spelling added is
//! the one kept.
//!
//! # Example
//!
//! ```
//! use bgplanner_core::{BoardGame, GameList};
//!
//! let games = vec![
//!     BoardGame::new("Azul", 1, 2, 4, 30, 45, 1.8, 50, 7.8, 2017),
//!     BoardGame::new("Catan", 2, 3, 4, 60, 120, 2.3, 400, 7.1, 1995),
//!     BoardGame::new("Pandemic", 3, 2, 4, 45, 45, 2.4, 100, 7.6, 2008),
//! ];
//! let candidates: Vec<&BoardGame> = games.iter().collect();
//!
//! let mut list = GameList::new();
//! list.add("2-10", &candidates).unwrap();
//! assert_eq!(list.names(), vec!["Catan", "Pandemic"]);
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::model::BoardGame;

/// Input that selects every game.
pub const ADD_ALL: &str = "all";

/// Separator between the bounds of a range.
const RANGE_SEPARATOR: char = '-';

/// Errors from list operations. A failed operation leaves the list unchanged.
#[derive(Debug, Error)]
pub enum GameListError {
    /// The input was empty.
    #[error("no game, index or range given")]
    EmptyInput,

    /// There were no candidate games to add from.
    #[error("no games available to add")]
    NoCandidates,

    /// Tried to remove from an empty list.
    #[error("the game list is empty")]
    EmptyList,

    /// A single index outside `1..=len`.
    #[error("index out of bounds: {index} (expected 1-{len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A range with a zero start or a start after its end.
    #[error("invalid range values: {start}-{end}")]
    InvalidRange { start: usize, end: usize },

    /// A range starting past the end of the sequence.
    #[error("start index out of bounds: {start} (only {len} games)")]
    RangeStartOutOfBounds { start: usize, len: usize },

    /// The input is not `all`, a known name, an index or a range.
    #[error("invalid format: {input}")]
    InvalidFormat { input: String },

    /// Writing the list to a sink failed.
    #[error("failed to write game list: {0}")]
    Write(#[source] io::Error),

    /// Writing the list to a file failed.
    #[error("failed to write game list '{path}': {source}")]
    Io {
        /// The destination file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Result type for game list operations.
pub type GameListResult<T> = std::result::Result<T, GameListError>;

/// A de-duplicated list of chosen games, kept in case-insensitive name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameList {
    /// Lower-cased name to name as first added.
    names: BTreeMap<String, String>,
}

impl GameList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of games in the list.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the list has no games.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns true if a game with this name (any case) is listed.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(&name.to_lowercase())
    }

    /// Listed names, sorted case-insensitively.
    pub fn names(&self) -> Vec<String> {
        self.names.values().cloned().collect()
    }

    /// Removes every game.
    pub fn clear(&mut self) {
        debug!(removed = self.names.len(), "game list cleared");
        self.names.clear();
    }

    /// Adds games chosen from `candidates`.
    ///
    /// Indices and ranges are positions in `candidates` exactly as given, so
    /// pass the same sequence that was shown to the user.
    ///
    /// Returns the number of games that were not already listed.
    ///
    /// # Errors
    ///
    /// Returns `GameListError::EmptyInput` or `GameListError::NoCandidates`
    /// when there is nothing to resolve, an out-of-range error for a bad
    /// index or range, and `GameListError::InvalidFormat` for anything else
    /// that does not resolve.
    pub fn add(&mut self, input: &str, candidates: &[&BoardGame]) -> GameListResult<usize> {
        let input = input.trim();
        if input.is_empty() {
            return Err(GameListError::EmptyInput);
        }
        if candidates.is_empty() {
            return Err(GameListError::NoCandidates);
        }

        let positions = if input.eq_ignore_ascii_case(ADD_ALL) {
            0..candidates.len()
        } else {
            let names: Vec<&str> = candidates.iter().map(|g| g.name()).collect();
            resolve(input, &names)?
        };

        let added = candidates[positions]
            .iter()
            .filter(|game| self.insert(game.name()))
            .count();
        debug!(input, added, total = self.names.len(), "games added");
        Ok(added)
    }

    /// Removes games, resolving indices and ranges against [`GameList::names`].
    ///
    /// `all` clears the list, even when it is already empty.
    ///
    /// Returns the number of games removed.
    ///
    /// # Errors
    ///
    /// Returns `GameListError::EmptyList` if the list is empty, and otherwise
    /// the same errors as [`GameList::add`].
    pub fn remove(&mut self, input: &str) -> GameListResult<usize> {
        let input = input.trim();
        if input.is_empty() {
            return Err(GameListError::EmptyInput);
        }
        if input.eq_ignore_ascii_case(ADD_ALL) {
            let removed = self.names.len();
            self.clear();
            return Ok(removed);
        }
        if self.names.is_empty() {
            return Err(GameListError::EmptyList);
        }

        let sorted = self.names();
        let names: Vec<&str> = sorted.iter().map(String::as_str).collect();
        let positions = resolve(input, &names)?;

        for name in &names[positions.clone()] {
            self.names.remove(&name.to_lowercase());
        }
        debug!(input, removed = positions.len(), total = self.names.len(), "games removed");
        Ok(positions.len())
    }

    /// Writes the listed names, one per line, in [`GameList::names`] order.
    ///
    /// # Errors
    ///
    /// Returns `GameListError::Write` if the sink fails.
    pub fn save<W: Write>(&self, sink: W) -> GameListResult<()> {
        self.write_names(sink).map_err(GameListError::Write)
    }

    /// Writes the list to a file, replacing it if it exists.
    ///
    /// # Errors
    ///
    /// Returns `GameListError::Io` if the file cannot be created or written.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> GameListResult<()> {
        let path = path.as_ref();
        let to_error = |source| GameListError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(to_error)?;
        self.write_names(BufWriter::new(file)).map_err(to_error)?;
        debug!(path = %path.display(), count = self.names.len(), "game list saved");
        Ok(())
    }

    fn write_names<W: Write>(&self, mut sink: W) -> io::Result<()> {
        for name in self.names.values() {
            writeln!(sink, "{name}")?;
        }
        sink.flush()
    }

    /// Inserts a name, returning true if it was not already listed.
    fn insert(&mut self, name: &str) -> bool {
        let key = name.to_lowercase();
        if self.names.contains_key(&key) {
            return false;
        }
        self.names.insert(key, name.to_string());
        true
    }
}

/// Resolves a name, index or range to positions in `names`.
fn resolve(input: &str, names: &[&str]) -> GameListResult<Range<usize>> {
    let lowered = input.to_lowercase();
    if let Some(i) = names.iter().position(|name| name.to_lowercase() == lowered) {
        return Ok(i..i + 1);
    }

    let len = names.len();
    if let Some((start, end)) = parse_range(input) {
        if start == 0 || start > end {
            return Err(GameListError::InvalidRange { start, end });
        }
        if start > len {
            return Err(GameListError::RangeStartOutOfBounds { start, len });
        }
        return Ok(start - 1..end.min(len));
    }

    if let Some(index) = parse_index(input) {
        if index == 0 || index > len {
            return Err(GameListError::IndexOutOfRange { index, len });
        }
        return Ok(index - 1..index);
    }

    Err(GameListError::InvalidFormat {
        input: input.to_string(),
    })
}

/// Parses `^\d+$`.
fn parse_index(input: &str) -> Option<usize> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

/// Parses `^\d+-\d+$`.
fn parse_range(input: &str) -> Option<(usize, usize)> {
    let (start, end) = input.split_once(RANGE_SEPARATOR)?;
    Some((parse_index(start)?, parse_index(end)?))
}
