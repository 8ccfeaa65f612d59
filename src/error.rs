use std::path::PathBuf;

use crate::core::Status;

/// Reasons a move is rejected.
///
/// [`GameEngine::apply_move`](crate::engine::GameEngine::apply_move) treats all
/// of these as a no-op; [`GameEngine::try_apply_move`](crate::engine::GameEngine::try_apply_move)
/// returns them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell {index} is off the board ({cell_count} cells)")]
    OutOfRange { index: usize, cell_count: usize },

    #[error("cell {0} is already occupied")]
    Occupied(usize),

    #[error("game is already over")]
    GameOver,

    #[error("opponent policy chose illegal cell {cell:?}")]
    IllegalOpponentMove { cell: Option<usize> },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Reasons a deserialized board or game snapshot is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("board side {side} with {cells} cells is not a non-empty square")]
    BoardShape { side: usize, cells: usize },

    #[error("history entry {index} does not replay onto the board")]
    HistoryMismatch { index: usize },

    #[error("status {0:?} does not match the board")]
    StatusMismatch(Status),
}
