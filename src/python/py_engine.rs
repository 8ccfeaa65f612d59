//! Engine bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::EngineConfig;
use crate::engine::GameEngine;

/// Python wrapper for GameEngine.
///
/// Players are numbered 1 and 2; a winner of 0 means none.
#[pyclass(name = "GameEngine")]
pub struct PyGameEngine {
    inner: GameEngine,
}

#[pymethods]
impl PyGameEngine {
    /// Create a new engine.
    ///
    /// # Arguments
    /// - side_length: Board side length (3 for the classic game)
    /// - two_players: Start in two-player mode
    /// - seed: RNG seed for the AI; None seeds from entropy
    #[new]
    #[pyo3(signature = (side_length = 3, two_players = false, seed = None))]
    fn new(side_length: usize, two_players: bool, seed: Option<u64>) -> PyResult<Self> {
        let mut config = EngineConfig::new()
            .with_side_length(side_length)
            .with_two_players(two_players);
        config.seed = seed;

        let inner = GameEngine::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Start a new game, keeping the mode.
    fn reset(&mut self) {
        self.inner.reset();
    }

    /// Switch between single-player and two-player.
    fn set_mode(&mut self, two_players: bool) {
        self.inner.set_mode(two_players);
    }

    /// Attempt a move at `cell`.
    ///
    /// Returns False if the move was ignored (off the board, occupied, or
    /// game over).
    fn apply_move(&mut self, cell: usize) -> bool {
        self.inner.try_apply_move(cell).is_ok()
    }

    /// Cell code at `cell`: 0 empty, 1 or 2 for a player. None if off the board.
    fn cell(&self, cell: usize) -> Option<u8> {
        self.inner.state().board().get(cell).map(|c| c.code())
    }

    /// Legal cells for the next move.
    fn empty_cells(&self) -> Vec<usize> {
        if self.inner.state().is_over() {
            return Vec::new();
        }
        self.inner.state().board().empty_cells().to_vec()
    }

    /// Get the board as a flat numpy array of cell codes.
    fn board_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        PyArray1::from_vec_bound(py, self.inner.state().board().codes())
    }

    #[getter]
    fn side_length(&self) -> usize {
        self.inner.state().board().side_length()
    }

    #[getter]
    fn moves_played(&self) -> usize {
        self.inner.state().moves_played()
    }

    #[getter]
    fn current_player(&self) -> u8 {
        self.inner.state().current_player().number()
    }

    #[getter]
    fn winner(&self) -> u8 {
        self.inner.state().winner_number()
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.inner.state().is_over()
    }

    #[getter]
    fn two_players(&self) -> bool {
        self.inner.is_two_players()
    }

    fn __str__(&self) -> String {
        self.inner.state().board().to_string()
    }

    fn __repr__(&self) -> String {
        let state = self.inner.state();
        format!(
            "GameEngine(moves={}, next=P{}, winner={}, over={}, two_players={})",
            state.moves_played(),
            state.current_player().number(),
            state.winner_number(),
            state.is_over(),
            self.inner.is_two_players()
        )
    }
}
