//! Catalog file storage.
//!
//! The catalog is a JSON array of games, stored by default at the XDG data
//! path `~/.local/share/bgp/games.json`:
//!
//! ```json
//! [
//!   {
//!     "name": "Go",
//!     "id": 1,
//!     "min_players": 2,
//!     "max_players": 2,
//!     "min_play_time": 30,
//!     "max_play_time": 30,
//!     "difficulty": 8.0,
//!     "rank": 100,
//!     "rating": 7.5,
//!     "year_published": -2000
//!   }
//! ]
//! ```

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

use crate::model::BoardGame;

/// Default catalog filename.
const CATALOG_FILENAME: &str = "games.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "bgp";

/// Errors that can occur while reading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to determine the XDG data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// The catalog file does not exist.
    #[error("catalog file '{path}' not found")]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// I/O error during file read.
    #[error("failed to read catalog file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is not a JSON array of games.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Reads the game catalog. The file is maintained outside the planner.
///
/// # Example
///
/// ```no_run
/// use bgplanner_core::{CatalogStore, Planner};
///
/// let store = CatalogStore::with_path(CatalogStore::default_path()?);
/// let planner = Planner::new(store.load()?);
/// # Ok::<(), bgplanner_core::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    /// Path to the catalog file.
    path: PathBuf,
}

impl CatalogStore {
    /// Creates a store for the catalog at `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default catalog path.
    ///
    /// On Unix: `~/.local/share/bgp/games.json`
    /// On macOS: `~/Library/Application Support/bgp/games.json`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NoDataDir` if the home directory cannot be determined.
    pub fn default_path() -> CatalogResult<PathBuf> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(CatalogError::NoDataDir)?;
        Ok(project_dirs.data_dir().join(CATALOG_FILENAME))
    }

    /// Returns the path to the catalog file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Loads every game from the catalog.
    ///
    /// # Errors
    ///
    /// - Returns `CatalogError::NotFound` if the file does not exist.
    /// - Returns `CatalogError::ReadError` if the file cannot be read.
    /// - Returns `CatalogError::Json` if the file is not a JSON array of games.
    pub fn load(&self) -> CatalogResult<Vec<BoardGame>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                CatalogError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                CatalogError::ReadError {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;
        let games: Vec<BoardGame> = serde_json::from_str(&contents)?;
        debug!(path = %self.path.display(), count = games.len(), "catalog loaded");
        Ok(games)
    }
}
