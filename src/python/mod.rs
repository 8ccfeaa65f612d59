//! Python bindings for the tic-tac-toe engine.
//!
//! Built with the `python` feature.
//!
//! # Quick Start
//!
//! ```python
//! import tictactoe_engine as ttt
//!
//! engine = ttt.GameEngine(two_players=False, seed=42)
//! engine.apply_move(4)          # human move + AI reply
//! print(engine)                 # board
//! board = engine.board_numpy()  # cell codes 0/1/2
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// tictactoe_engine: Tic Tac Toe with a random AI opponent.
#[pymodule]
fn tictactoe_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameEngine>()?;
    Ok(())
}
