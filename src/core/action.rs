//! Inbound intents and recorded moves.
//!
//! A presentation layer drives the engine with three intents: start over,
//! switch mode, or attempt a move at a cell. Intents serialize as tagged
//! JSON so they can cross a process boundary unchanged:
//!
//! ```
//! use tictactoe_engine::core::Intent;
//!
//! let intent: Intent = serde_json::from_str(r#"{"type":"attempt_move","cell":4}"#).unwrap();
//! assert_eq!(intent, Intent::AttemptMove { cell: 4 });
//! ```

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A user-initiated event sent into the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Start a new game, keeping the mode.
    Reset,
    /// Switch between single-player and two-player.
    SetMode { two_players: bool },
    /// Place the current player's mark at `cell`.
    AttemptMove { cell: usize },
}

/// A placed mark, kept in the game's move history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who placed the mark.
    pub player: Player,

    /// Row-major cell index.
    pub cell: usize,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, cell: usize) -> Self {
        Self { player, cell }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_json_tags() {
        assert_eq!(serde_json::to_string(&Intent::Reset).unwrap(), r#"{"type":"reset"}"#);
        assert_eq!(
            serde_json::to_string(&Intent::SetMode { two_players: true }).unwrap(),
            r#"{"type":"set_mode","two_players":true}"#
        );
        assert_eq!(
            serde_json::to_string(&Intent::AttemptMove { cell: 8 }).unwrap(),
            r#"{"type":"attempt_move","cell":8}"#
        );
    }

    #[test]
    fn test_intent_rejects_unknown_type() {
        let result: Result<Intent, _> = serde_json::from_str(r#"{"type":"undo"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_move_record() {
        let record = MoveRecord::new(Player::Two, 7);
        assert_eq!(record.player, Player::Two);
        assert_eq!(record.cell, 7);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
