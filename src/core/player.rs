//! Player identification and display marks.
//!
//! ## Player
//!
//! Tic Tac Toe always has exactly two players. Player one moves first and is
//! the human in single-player mode; player two is the AI opponent there.
//!
//! ## Marks
//!
//! Player one renders as `O`, player two as `X`.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first. The human in single-player mode.
    One,
    /// Moves second. The AI in single-player mode.
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The player's number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Look up a player by number. Returns `None` for anything but 1 or 2.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The mark this player places on the board.
    #[must_use]
    pub const fn mark(self) -> char {
        match self {
            Player::One => 'O',
            Player::Two => 'X',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_numbers() {
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.number(), 2);
        assert_eq!(Player::from_number(1), Some(Player::One));
        assert_eq!(Player::from_number(2), Some(Player::Two));
        assert_eq!(Player::from_number(0), None);
        assert_eq!(Player::from_number(3), None);
    }

    #[test]
    fn test_player_other() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::One.other().other(), Player::One);
    }

    #[test]
    fn test_player_marks() {
        assert_eq!(Player::One.mark(), 'O');
        assert_eq!(Player::Two.mark(), 'X');
    }

    #[test]
    fn test_player_display() {
        assert_eq!(format!("{}", Player::One), "Player 1");
        assert_eq!(format!("{}", Player::Two), "Player 2");
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Player::Two).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::Two);
    }
}
