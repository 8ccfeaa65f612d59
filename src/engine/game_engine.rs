//! `GameEngine`: owner of the current game, the mode and the AI's RNG.

use tracing::{debug, info, instrument};

use super::view::EngineView;
use crate::ai::{OpponentPolicy, RandomOpponent};
use crate::core::{EngineConfig, GameRng, GameRngState, GameState, Intent, Mode};
use crate::error::{ConfigError, MoveError};
use crate::rules;

/// The Tic Tac Toe engine.
///
/// Holds one [`GameState`] snapshot plus the [`Mode`]. Every state change goes
/// through [`reset`](Self::reset), [`set_mode`](Self::set_mode) or
/// [`apply_move`](Self::apply_move); each replaces the snapshot wholesale.
///
/// ```
/// use tictactoe_engine::{EngineConfig, GameEngine, Player};
///
/// let mut engine = GameEngine::new(EngineConfig::new().with_two_players(true)).unwrap();
/// engine.apply_move(4);
/// assert_eq!(engine.state().current_player(), Player::Two);
/// ```
#[derive(Debug)]
pub struct GameEngine<P: OpponentPolicy = RandomOpponent> {
    config: EngineConfig,
    state: GameState,
    mode: Mode,
    rng: GameRng,
    opponent: P,
}

impl GameEngine<RandomOpponent> {
    /// Create an engine with the random AI opponent.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_opponent(config, RandomOpponent)
    }
}

impl Default for GameEngine<RandomOpponent> {
    /// 3×3, single-player, entropy-seeded.
    fn default() -> Self {
        let config = EngineConfig::default();
        debug_assert!(config.validate().is_ok(), "default config must validate");
        Self::from_parts(config, RandomOpponent)
    }
}

impl<P: OpponentPolicy> GameEngine<P> {
    /// Create an engine with a custom opponent policy.
    pub fn with_opponent(config: EngineConfig, opponent: P) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, opponent))
    }

    fn from_parts(config: EngineConfig, opponent: P) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        debug!(
            side_length = config.side_length,
            mode = ?config.mode(),
            seed = rng.seed(),
            policy = opponent.name(),
            "engine created"
        );

        Self {
            state: GameState::new(config.side_length),
            mode: config.mode(),
            config,
            rng,
            opponent,
        }
    }

    // === Intents ===

    /// Start a new game. The mode is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameState {
        self.state = GameState::new(self.config.side_length);
        &self.state
    }

    /// Switch mode. The current game is left as it is, even mid-game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, two_players: bool) {
        self.mode = Mode::from_two_players(two_players);
    }

    /// Apply the current player's move at `cell`, plus the AI's reply in
    /// single-player mode.
    ///
    /// Invalid moves (off the board, occupied cell, game over) leave the state
    /// unchanged.
    pub fn apply_move(&mut self, cell: usize) -> &GameState {
        if let Err(err) = self.transition(cell) {
            debug!(cell, %err, "move ignored");
        }
        &self.state
    }

    /// Like [`apply_move`](Self::apply_move) but reports why a move was
    /// rejected. The state is unchanged on error.
    pub fn try_apply_move(&mut self, cell: usize) -> Result<&GameState, MoveError> {
        self.transition(cell)?;
        Ok(&self.state)
    }

    /// Apply an inbound intent and return the resulting state.
    pub fn dispatch(&mut self, intent: Intent) -> &GameState {
        match intent {
            Intent::Reset => {
                self.reset();
            }
            Intent::SetMode { two_players } => self.set_mode(two_players),
            Intent::AttemptMove { cell } => {
                self.apply_move(cell);
            }
        }
        &self.state
    }

    #[instrument(skip(self), fields(mode = ?self.mode, player = ?self.state.current_player()))]
    fn transition(&mut self, cell: usize) -> Result<(), MoveError> {
        let next = rules::apply_move(&self.state, cell, self.mode, &self.opponent, &mut self.rng)?;
        if next.is_over() {
            info!(status = ?next.status(), moves = next.moves_played(), "game over");
        }
        self.state = next;
        Ok(())
    }

    // === Queries ===

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_two_players(&self) -> bool {
        self.mode.is_two_players()
    }

    /// Snapshot of state and mode for rendering.
    #[must_use]
    pub fn view(&self) -> EngineView {
        EngineView::new(self.state.clone(), self.mode)
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn opponent(&self) -> &P {
        &self.opponent
    }

    /// RNG position, enough to replay the AI's upcoming choices.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
