//! Error types
//!
//! None of these escape [`crate::engine::MoveAdvisor::choose_move`]: oracle
//! failures are recovered through the fallback chain.

use crate::board::Pos;

/// Errors from playing a move on a [`crate::game::Game`]
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Coordinates outside the board
    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },

    /// Target cell already holds a stone
    #[error("{0} is already occupied")]
    Occupied(Pos),

    /// The game already has a winner or the board is full
    #[error("game is already over")]
    GameOver,
}

/// Errors reported by an advisory oracle
#[derive(thiserror::Error, Debug)]
pub enum OracleError {
    /// No oracle is wired in
    #[error("no advisory oracle configured")]
    Unavailable,

    /// The completion client failed to deliver an answer
    #[error("oracle transport failed: {0}")]
    Transport(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors loading an advisor configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot encode config: {0}")]
    Encode(#[from] toml::ser::Error),
}
