//! Error types for tie resolution.

use thiserror::Error;

/// Rejection of malformed fixture input.
///
/// Every variant is a caller-input problem. Nothing here is transient, so
/// retrying the same input always fails the same way.
#[derive(Debug, Error)]
pub enum TieError {
    /// No games were supplied at all.
    #[error("missing games info")]
    MissingGames,

    /// Games were supplied, but not exactly two of them.
    #[error("need exactly two games, got {count}")]
    GameCount { count: usize },

    /// A leg is missing `home`/`away` or carries a score that is not a
    /// non-negative integer.
    ///
    /// `leg` is 1-based; 0 when the games value itself is not a list.
    #[error("invalid games data: leg {leg} {detail}")]
    InvalidGameData { leg: usize, detail: String },

    /// Teams were supplied, but not exactly two of them.
    #[error("need exactly two teams, got {count}")]
    TeamCount { count: usize },

    /// A supplied team entry is not a string.
    ///
    /// `index` is 0-based into the supplied list.
    #[error("invalid team data: entry {index} is not a string")]
    InvalidTeamData { index: usize },

    /// The options value is not an object of booleans.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The fixture document is not valid JSON.
    #[error("malformed fixture document: {0}")]
    Json(#[from] serde_json::Error),
}

impl TieError {
    /// Stable short tag naming the kind of rejection.
    pub fn kind(&self) -> &'static str {
        match self {
            TieError::MissingGames => "MissingGamesError",
            TieError::GameCount { .. } => "GameCountError",
            TieError::InvalidGameData { .. } => "InvalidGameDataError",
            TieError::TeamCount { .. } => "TeamCountError",
            TieError::InvalidTeamData { .. } => "InvalidTeamDataError",
            TieError::InvalidOptions(_) => "InvalidOptionsError",
            TieError::Json(_) => "JsonError",
        }
    }
}

/// Result type alias for tie resolution.
pub type Result<T> = std::result::Result<T, TieError>;
