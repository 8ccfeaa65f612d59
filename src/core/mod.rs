//! Core engine types: players, board, state, intents, RNG, configuration.
//!
//! These are plain data types with no game logic beyond bookkeeping.
//! The rules that move a game forward live in `rules`.

pub mod player;
pub mod board;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::Player;
pub use board::{Board, Cell, CellList, STANDARD_SIDE_LENGTH};
pub use rng::{GameRng, GameRngState};
pub use config::{EngineConfig, Mode, MAX_SIDE_LENGTH};
pub use action::{Intent, MoveRecord};
pub use state::{GameState, Status};
