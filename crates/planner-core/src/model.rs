//! Board game records and the columns they can be filtered or sorted on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single board game from the catalog.
///
/// Games are built once by the catalog loader and never mutated afterwards,
/// so every field is private and only exposed through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardGame {
    name: String,
    id: u32,
    min_players: u32,
    max_players: u32,
    min_play_time: u32,
    max_play_time: u32,
    difficulty: f64,
    rank: u32,
    rating: f64,
    year_published: i32,
}

impl BoardGame {
    /// Creates a new board game.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        id: u32,
        min_players: u32,
        max_players: u32,
        min_play_time: u32,
        max_play_time: u32,
        difficulty: f64,
        rank: u32,
        rating: f64,
        year_published: i32,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            min_players,
            max_players,
            min_play_time,
            max_play_time,
            difficulty,
            rank,
            rating,
            year_published,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn min_players(&self) -> u32 {
        self.min_players
    }

    pub fn max_players(&self) -> u32 {
        self.max_players
    }

    pub fn min_play_time(&self) -> u32 {
        self.min_play_time
    }

    pub fn max_play_time(&self) -> u32 {
        self.max_play_time
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn year_published(&self) -> i32 {
        self.year_published
    }
}

/// Whether a column holds text or a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// The value of one column for one game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

/// A column of the game catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameData {
    Name,
    Rating,
    Difficulty,
    Rank,
    MinPlayers,
    MaxPlayers,
    MinTime,
    MaxTime,
    Year,
}

/// Column table: (field, canonical column name, kind).
const COLUMNS: [(GameData, &str, FieldKind); 9] = [
    (GameData::Name, "name", FieldKind::Text),
    (GameData::Rating, "rating", FieldKind::Number),
    (GameData::Difficulty, "difficulty", FieldKind::Number),
    (GameData::Rank, "rank", FieldKind::Number),
    (GameData::MinPlayers, "minPlayers", FieldKind::Number),
    (GameData::MaxPlayers, "maxPlayers", FieldKind::Number),
    (GameData::MinTime, "minTime", FieldKind::Number),
    (GameData::MaxTime, "maxTime", FieldKind::Number),
    (GameData::Year, "year", FieldKind::Number),
];

impl GameData {
    /// Every column, in catalog order.
    pub const ALL: [GameData; 9] = [
        GameData::Name,
        GameData::Rating,
        GameData::Difficulty,
        GameData::Rank,
        GameData::MinPlayers,
        GameData::MaxPlayers,
        GameData::MinTime,
        GameData::MaxTime,
        GameData::Year,
    ];

    fn entry(self) -> &'static (GameData, &'static str, FieldKind) {
        // COLUMNS is indexed in declaration order of the enum.
        &COLUMNS[self as usize]
    }

    /// The canonical column name used in filter expressions.
    pub fn column_name(self) -> &'static str {
        self.entry().1
    }

    /// Whether the column is compared as text or as a number.
    pub fn kind(self) -> FieldKind {
        self.entry().2
    }

    /// Looks up a column by name, ignoring case and surrounding whitespace.
    ///
    /// Matching is exact apart from case: `minplayers` matches, `min players` does not.
    pub fn from_column(name: &str) -> Option<GameData> {
        let name = name.trim();
        COLUMNS
            .iter()
            .find(|(_, column, _)| column.eq_ignore_ascii_case(name))
            .map(|(field, _, _)| *field)
    }

    /// Reads this column from a game.
    pub fn value(self, game: &BoardGame) -> FieldValue<'_> {
        match self {
            GameData::Name => FieldValue::Text(game.name()),
            GameData::Rating => FieldValue::Number(game.rating()),
            GameData::Difficulty => FieldValue::Number(game.difficulty()),
            GameData::Rank => FieldValue::Number(f64::from(game.rank())),
            GameData::MinPlayers => FieldValue::Number(f64::from(game.min_players())),
            GameData::MaxPlayers => FieldValue::Number(f64::from(game.max_players())),
            GameData::MinTime => FieldValue::Number(f64::from(game.min_play_time())),
            GameData::MaxTime => FieldValue::Number(f64::from(game.max_play_time())),
            GameData::Year => FieldValue::Number(f64::from(game.year_published())),
        }
    }

    /// Reads a numeric column, or `None` for the name column.
    pub fn number(self, game: &BoardGame) -> Option<f64> {
        match self.value(game) {
            FieldValue::Number(n) => Some(n),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for GameData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Error returned when a string does not name a known column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown column: {0}")]
pub struct UnknownColumn(pub String);

impl FromStr for GameData {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameData::from_column(s).ok_or_else(|| UnknownColumn(s.trim().to_string()))
    }
}
