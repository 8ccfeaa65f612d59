//! Opponent policies for single-player mode.
//!
//! The engine asks the policy for player two's cell whenever the human's move
//! leaves the game in progress. Only a uniform random policy ships.

use crate::core::{Board, GameRng};

/// Policy choosing the AI's cell.
pub trait OpponentPolicy: Send + Sync {
    /// Choose an empty cell on `board`.
    ///
    /// Returns `None` if the board is full.
    fn choose_cell(&self, board: &Board, rng: &mut GameRng) -> Option<usize>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Uniform random opponent.
///
/// Samples cell indices uniformly over the whole board and retries while the
/// sampled cell is occupied, which is uniform over the empty cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomOpponent;

impl OpponentPolicy for RandomOpponent {
    fn choose_cell(&self, board: &Board, rng: &mut GameRng) -> Option<usize> {
        if board.is_full() {
            return None;
        }
        let cell_count = board.cell_count();
        loop {
            let index = rng.gen_range_usize(0..cell_count);
            if board.is_empty_at(index) {
                return Some(index);
            }
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

impl<P: OpponentPolicy + ?Sized> OpponentPolicy for Box<P> {
    fn choose_cell(&self, board: &Board, rng: &mut GameRng) -> Option<usize> {
        (**self).choose_cell(board, rng)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Player};

    #[test]
    fn test_random_picks_empty_cell() {
        let mut board = Board::standard();
        for index in [0, 1, 2, 4, 6] {
            board.set(index, Cell::Occupied(Player::One));
        }
        let mut rng = GameRng::new(42);

        for _ in 0..200 {
            let cell = RandomOpponent.choose_cell(&board, &mut rng).unwrap();
            assert!(board.is_empty_at(cell), "cell {cell} is occupied");
        }
    }

    #[test]
    fn test_random_single_empty_cell() {
        let mut board = Board::standard();
        for index in 0..8 {
            board.set(index, Cell::Occupied(Player::Two));
        }
        let mut rng = GameRng::new(1);

        assert_eq!(RandomOpponent.choose_cell(&board, &mut rng), Some(8));
    }

    #[test]
    fn test_random_full_board() {
        let mut board = Board::standard();
        for index in 0..9 {
            board.set(index, Cell::Occupied(Player::One));
        }
        let mut rng = GameRng::new(1);

        assert_eq!(RandomOpponent.choose_cell(&board, &mut rng), None);
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let board = Board::standard();
        let mut rng1 = GameRng::new(5);
        let mut rng2 = GameRng::new(5);

        for _ in 0..20 {
            assert_eq!(
                RandomOpponent.choose_cell(&board, &mut rng1),
                RandomOpponent.choose_cell(&board, &mut rng2)
            );
        }
    }

    #[test]
    fn test_boxed_policy() {
        let policy: Box<dyn OpponentPolicy> = Box::new(RandomOpponent);
        let mut rng = GameRng::new(0);

        assert_eq!(policy.name(), "random");
        assert!(policy.choose_cell(&Board::standard(), &mut rng).is_some());
    }
}
