//! Incremental win detection.
//!
//! Only lines through the last-placed cell can have just been completed, so a
//! placement is checked along the four axes through it: horizontal, vertical
//! and both diagonals. For each axis the contiguous run of the mover's mark is
//! counted outward in both directions; the placed cell plus both runs totalling
//! exactly N means N in a row. A run along one axis never exceeds N.

use crate::core::{Board, Cell, Player};

/// The four axes as `(d_row, d_col)`; each is walked both ways.
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Did placing `player`'s mark at `index` complete a line of length N?
///
/// Assumes `index` already holds `player`'s mark.
#[must_use]
pub fn has_win_at(board: &Board, index: usize, player: Player) -> bool {
    if index >= board.cell_count() {
        return false;
    }
    let (row, col) = board.coords(index);
    let (row, col) = (row as isize, col as isize);
    let target = board.side_length();

    AXES.iter().any(|&(dr, dc)| {
        1 + count_run(board, player, row, col, dr, dc) + count_run(board, player, row, col, -dr, -dc)
            == target
    })
}

/// Length of the run of `player`'s marks starting one step from `(row, col)`
/// in direction `(dr, dc)`. Stops at the edge or at any other cell value.
#[must_use]
pub fn count_run(board: &Board, player: Player, row: isize, col: isize, dr: isize, dc: isize) -> usize {
    let mark = Cell::Occupied(player);
    let mut run = 0;
    let (mut r, mut c) = (row + dr, col + dc);

    while let Some(index) = board.index_of(r, c) {
        if board.get(index) != Some(mark) {
            break;
        }
        run += 1;
        r += dr;
        c += dc;
    }

    run
}

/// Scan a whole board for a completed line.
///
/// Not used on the move path; useful to check boards built outside a game.
#[must_use]
pub fn find_winner(board: &Board) -> Option<Player> {
    board
        .iter()
        .enumerate()
        .find_map(|(index, cell)| cell.player().filter(|&p| has_win_at(board, index, p)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(side: usize, cells: &[(usize, Player)]) -> Board {
        let mut board = Board::new(side);
        for &(index, player) in cells {
            board.set(index, Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_count_run_stops_at_edge() {
        let board = board_with(3, &[(0, Player::One), (1, Player::One), (2, Player::One)]);

        assert_eq!(count_run(&board, Player::One, 0, 0, 0, 1), 2);
        assert_eq!(count_run(&board, Player::One, 0, 2, 0, -1), 2);
        assert_eq!(count_run(&board, Player::One, 0, 2, 0, 1), 0);
    }

    #[test]
    fn test_count_run_stops_at_other_mark() {
        let board = board_with(3, &[(0, Player::One), (1, Player::Two), (2, Player::One)]);
        assert_eq!(count_run(&board, Player::One, 0, 0, 0, 1), 0);
    }

    #[test]
    fn test_count_run_stops_at_empty() {
        let board = board_with(3, &[(0, Player::One), (2, Player::One)]);
        assert_eq!(count_run(&board, Player::One, 0, 0, 0, 1), 0);
    }

    #[test]
    fn test_middle_placement_counts_both_ways() {
        let board = board_with(3, &[(3, Player::Two), (4, Player::Two), (5, Player::Two)]);
        assert!(has_win_at(&board, 4, Player::Two));
        assert!(!has_win_at(&board, 4, Player::One));
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_with(3, &[(2, Player::One), (4, Player::One), (6, Player::One)]);
        assert!(has_win_at(&board, 6, Player::One));
        assert!(has_win_at(&board, 2, Player::One));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = board_with(3, &[(0, Player::One), (4, Player::One)]);
        assert!(!has_win_at(&board, 4, Player::One));
    }

    #[test]
    fn test_no_wraparound() {
        // 2, 3, 4 are contiguous in index order but not on one row
        let board = board_with(3, &[(2, Player::One), (3, Player::One), (4, Player::One)]);
        assert!(!has_win_at(&board, 3, Player::One));
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_out_of_range_index() {
        let board = Board::standard();
        assert!(!has_win_at(&board, 9, Player::One));
    }

    #[test]
    fn test_single_cell_board() {
        let board = board_with(1, &[(0, Player::One)]);
        assert!(has_win_at(&board, 0, Player::One));
    }

    #[test]
    fn test_find_winner() {
        assert_eq!(find_winner(&Board::standard()), None);

        let board = board_with(
            3,
            &[(0, Player::Two), (4, Player::Two), (8, Player::Two), (1, Player::One)],
        );
        assert_eq!(find_winner(&board), Some(Player::Two));
    }
}
