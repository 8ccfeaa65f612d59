//! The N×N grid.
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a board (and every
//! snapshot holding one) is O(1) and structurally shares unchanged cells.
//!
//! ## Coordinates
//!
//! Cell `index` sits at `row = index / N`, `col = index % N`.
//!
//! ```
//! use tictactoe_engine::core::Board;
//!
//! let board = Board::standard();
//! assert_eq!(board.cell_count(), 9);
//! assert_eq!(board.coords(5), (1, 2));
//! assert_eq!(board.index_of(2, 1), Some(7));
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;
use crate::error::SnapshotError;

/// Side length of the classic board.
pub const STANDARD_SIDE_LENGTH: usize = 3;

/// Contents of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The occupying player, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Numeric code: 0 for empty, otherwise the player number.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(player) => player.number(),
        }
    }

    /// Display mark: the player's mark, `.` for empty.
    #[must_use]
    pub const fn mark(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.mark(),
        }
    }
}

/// Indices of empty cells. Inline for boards up to 4×4.
pub type CellList = SmallVec<[usize; 16]>;

/// An N×N board of cells.
///
/// Deserialization rejects any shape other than a non-empty square.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    side: usize,
    cells: Vector<Cell>,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    side: usize,
    cells: Vector<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = SnapshotError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let cells = repr.cells.len();
        Board::from_cells(repr.side, repr.cells).ok_or(SnapshotError::BoardShape {
            side: repr.side,
            cells,
        })
    }
}

impl Board {
    /// Create an empty board with the given side length.
    #[must_use]
    pub fn new(side: usize) -> Self {
        assert!(side > 0, "Side length must be at least 1");

        Self {
            side,
            cells: std::iter::repeat(Cell::Empty).take(side * side).collect(),
        }
    }

    /// Create an empty 3×3 board.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_SIDE_LENGTH)
    }

    /// Build a board from row-major cells.
    ///
    /// Returns `None` if `cells` does not hold exactly `side * side` entries.
    #[must_use]
    pub fn from_cells(side: usize, cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let cells: Vector<Cell> = cells.into_iter().collect();
        if side == 0 || side.checked_mul(side) != Some(cells.len()) {
            return None;
        }
        Some(Self { side, cells })
    }

    /// Side length N.
    #[must_use]
    pub fn side_length(&self) -> usize {
        self.side
    }

    /// Number of cells (N²).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the cell at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// True if `index` is on the board and holds no mark.
    #[must_use]
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Row and column of `index`.
    #[must_use]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.side, index % self.side)
    }

    /// Index of `(row, col)`, or `None` if off the board.
    ///
    /// Takes signed coordinates so callers can step past an edge.
    #[must_use]
    pub fn index_of(&self, row: isize, col: isize) -> Option<usize> {
        let side = self.side as isize;
        if row < 0 || row >= side || col < 0 || col >= side {
            return None;
        }
        Some((row * side + col) as usize)
    }

    /// Write a cell. Out-of-range indices are ignored.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        if index < self.cells.len() {
            self.cells.set(index, cell);
        }
    }

    /// Iterate over cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Indices of all empty cells, ascending.
    #[must_use]
    pub fn empty_cells(&self) -> CellList {
        self.iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.iter().filter(|cell| !cell.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.iter().all(|cell| !cell.is_empty())
    }

    /// Cell codes (0 empty, 1 or 2 for a player) in row-major order.
    #[must_use]
    pub fn codes(&self) -> Vec<u8> {
        self.iter().map(Cell::code).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.side {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.side {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[row * self.side + col].mark())?;
            }
        }
        Ok(())
    }
}
