//! Game state snapshots.
//!
//! ## Status
//!
//! `InProgress → InProgress | Won(player) | Draw`. `Won` and `Draw` are
//! terminal: no further moves are accepted.
//!
//! ## GameState
//!
//! An immutable snapshot of one game: board, player to move, status and
//! move history. Transitions never edit a snapshot in place; they clone it
//! (O(1), persistent vectors) and return the new value, so a presentation
//! layer can detect changes with `==`.
//!
//! Move count and winner are derived from the history and status, which
//! keeps the invariants true by construction:
//! - `moves_played()` equals the number of occupied cells
//! - `winner().is_some()` implies `is_over()`
//!
//! Deserialized snapshots are checked against the same invariants: the
//! history must replay onto an empty board to give exactly the stored board,
//! and the status must agree with it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::board::{Board, Cell};
use super::player::Player;
use crate::error::SnapshotError;
use crate::rules::find_winner;

/// Where a game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    InProgress,
    /// A placement completed a line for this player.
    Won(Player),
    /// The board filled with no completed line.
    Draw,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Snapshot of a single game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: Status,
    history: Vector<MoveRecord>,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct GameStateRepr {
    board: Board,
    current_player: Player,
    status: Status,
    history: Vector<MoveRecord>,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = SnapshotError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let mut replay = Board::new(repr.board.side_length());
        for (index, record) in repr.history.iter().enumerate() {
            if !replay.is_empty_at(record.cell) {
                return Err(SnapshotError::HistoryMismatch { index });
            }
            replay.set(record.cell, Cell::Occupied(record.player));
        }
        if replay != repr.board {
            return Err(SnapshotError::HistoryMismatch {
                index: repr.history.len(),
            });
        }

        let winner = find_winner(&repr.board);
        let consistent = match repr.status {
            Status::InProgress => winner.is_none() && !repr.board.is_full(),
            Status::Won(player) => winner == Some(player),
            Status::Draw => winner.is_none() && repr.board.is_full(),
        };
        if !consistent {
            return Err(SnapshotError::StatusMismatch(repr.status));
        }

        Ok(Self {
            board: repr.board,
            current_player: repr.current_player,
            status: repr.status,
            history: repr.history,
        })
    }
}

impl GameState {
    /// Create a fresh game on an empty N×N board with player one to move.
    #[must_use]
    pub fn new(side_length: usize) -> Self {
        Self {
            board: Board::new(side_length),
            current_player: Player::One,
            status: Status::InProgress,
            history: Vector::new(),
        }
    }

    /// Create a fresh 3×3 game.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(super::board::STANDARD_SIDE_LENGTH)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move. Only meaningful while the game is in progress.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Marks placed so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of marks on the board.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            Status::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Winner as a number: 0 for none, otherwise 1 or 2.
    #[must_use]
    pub fn winner_number(&self) -> u8 {
        self.winner().map_or(0, Player::number)
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.status == Status::Draw
    }

    /// The most recent placement, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    // === Transition helpers ===

    /// Place `player`'s mark at `cell` and record it. Unchecked.
    pub(crate) fn place(&mut self, cell: usize, player: Player) {
        self.board.set(cell, Cell::Occupied(player));
        self.history.push_back(MoveRecord::new(player, cell));
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}
