//! Game rules: win detection and the move transition.
//!
//! Everything here is a pure function over snapshots. The engine calls into
//! `transition::apply_move`; nothing else changes a game.

pub mod win;
pub mod transition;

pub use transition::{apply_move, validate_move};
pub use win::{count_run, find_winner, has_win_at};
