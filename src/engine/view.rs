//! Render-facing snapshot.
//!
//! `EngineView` bundles the game snapshot with the mode and answers the
//! questions a UI asks when drawing: whose turn it is, which cells accept
//! clicks, whether the mode switch and "start over" are enabled, and which
//! banner to show.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Mode, Player, Status};

/// Game snapshot plus mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineView {
    pub state: GameState,
    pub mode: Mode,
}

impl EngineView {
    #[must_use]
    pub fn new(state: GameState, mode: Mode) -> Self {
        Self { state, mode }
    }

    #[must_use]
    pub fn two_players(&self) -> bool {
        self.mode.is_two_players()
    }

    /// Player to move, or `None` once the game is over.
    #[must_use]
    pub fn next_up(&self) -> Option<Player> {
        (!self.state.is_over()).then(|| self.state.current_player())
    }

    /// Whether clicking `cell` would be a legal move.
    #[must_use]
    pub fn cell_enabled(&self, cell: usize) -> bool {
        !self.state.is_over() && self.state.board().is_empty_at(cell)
    }

    /// The mode switch is locked while player two is to move.
    ///
    /// The engine itself accepts `set_mode` at any time.
    #[must_use]
    pub fn mode_toggle_enabled(&self) -> bool {
        self.state.current_player() != Player::Two
    }

    /// "Start over" is offered once a move has been made.
    #[must_use]
    pub fn start_over_enabled(&self) -> bool {
        self.state.moves_played() > 0 || self.state.winner().is_some()
    }

    /// End-of-game message, if any.
    #[must_use]
    pub fn banner(&self) -> Option<String> {
        match self.state.status() {
            Status::InProgress => None,
            Status::Won(player) => Some(format!("The winner is {player}")),
            Status::Draw => Some("Game tied.".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomOpponent;
    use crate::core::GameRng;
    use crate::rules::apply_move;

    fn two_player_view(moves: &[usize]) -> EngineView {
        let mut rng = GameRng::new(0);
        let state = moves.iter().fold(GameState::standard(), |state, &cell| {
            apply_move(&state, cell, Mode::TwoPlayer, &RandomOpponent, &mut rng).unwrap()
        });
        EngineView::new(state, Mode::TwoPlayer)
    }

    #[test]
    fn test_fresh_view() {
        let view = EngineView::new(GameState::standard(), Mode::SinglePlayer);

        assert_eq!(view.next_up(), Some(Player::One));
        assert!(!view.two_players());
        assert!((0..9).all(|cell| view.cell_enabled(cell)));
        assert!(!view.cell_enabled(9));
        assert!(view.mode_toggle_enabled());
        assert!(!view.start_over_enabled());
        assert_eq!(view.banner(), None);
    }

    #[test]
    fn test_mid_game_view() {
        let view = two_player_view(&[4]);

        assert_eq!(view.next_up(), Some(Player::Two));
        assert!(!view.cell_enabled(4));
        assert!(view.cell_enabled(0));
        assert!(!view.mode_toggle_enabled());
        assert!(view.start_over_enabled());
    }

    #[test]
    fn test_won_view() {
        let view = two_player_view(&[0, 3, 1, 4, 2]);

        assert_eq!(view.next_up(), None);
        assert!(!view.cell_enabled(8));
        assert_eq!(view.banner().as_deref(), Some("The winner is Player 1"));
    }

    #[test]
    fn test_draw_view() {
        let view = two_player_view(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(view.next_up(), None);
        assert_eq!(view.banner().as_deref(), Some("Game tied."));
        assert!(view.start_over_enabled());
    }

    #[test]
    fn test_view_serialization() {
        let view = two_player_view(&[4, 0]);
        let json = serde_json::to_string(&view).unwrap();
        let deserialized: EngineView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
    }
}
