//! # tictactoe-engine
//!
//! A Tic Tac Toe game engine with two modes: single-player against a random
//! AI, or two players taking turns.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: every move produces a new `GameState`;
//!    the previous one is never edited. Snapshots clone in O(1) via `im-rs`.
//!
//! 2. **One transition**: in single-player mode the AI's reply is applied in
//!    the same transition as the human's move.
//!
//! 3. **Invalid moves are no-ops**: `apply_move` ignores moves on occupied or
//!    off-board cells and moves after the game ended. `try_apply_move` says why.
//!
//! 4. **Parametric board**: the rules work for any N×N board with N in a row
//!    to win; 3×3 is the default.
//!
//! ## Quick Start
//!
//! ```
//! use tictactoe_engine::{EngineConfig, GameEngine, Player};
//!
//! let mut engine = GameEngine::new(EngineConfig::new().with_seed(42)).unwrap();
//! let state = engine.apply_move(4);
//!
//! // Human move plus the AI's reply
//! assert_eq!(state.moves_played(), 2);
//! assert_eq!(state.current_player(), Player::One);
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, board, state snapshots, intents, RNG, configuration
//! - `rules`: Win detection and the move transition
//! - `ai`: Opponent policies for single-player mode
//! - `engine`: `GameEngine` and the render-facing `EngineView`
//! - `error`: Move, configuration and snapshot errors

pub mod core;
pub mod rules;
pub mod ai;
pub mod engine;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, EngineConfig, GameRng, GameRngState, GameState, Intent, Mode, MoveRecord, Player,
    Status,
};

pub use crate::rules::{apply_move, has_win_at};

pub use crate::ai::{OpponentPolicy, RandomOpponent};

pub use crate::engine::{EngineView, GameEngine};

pub use crate::error::{ConfigError, MoveError, SnapshotError};
