//! The move transition.
//!
//! `apply_move` is a pure function from one snapshot to the next. In
//! single-player mode the AI's reply is part of the same transition, so no
//! intermediate "AI to move" snapshot is ever observable.

use tracing::trace;

use super::win::has_win_at;
use crate::ai::OpponentPolicy;
use crate::core::{GameRng, GameState, Mode, Player, Status};
use crate::error::MoveError;

/// Check that `cell` is a legal move for the player to move in `state`.
pub fn validate_move(state: &GameState, cell: usize) -> Result<(), MoveError> {
    if state.is_over() {
        return Err(MoveError::GameOver);
    }
    let cell_count = state.board().cell_count();
    if cell >= cell_count {
        return Err(MoveError::OutOfRange {
            index: cell,
            cell_count,
        });
    }
    if !state.board().is_empty_at(cell) {
        return Err(MoveError::Occupied(cell));
    }
    Ok(())
}

/// Apply the current player's move at `cell` and, in single-player mode, the
/// AI's reply.
///
/// Returns the new snapshot; `state` is left untouched. On error nothing has
/// been applied.
pub fn apply_move<P>(
    state: &GameState,
    cell: usize,
    mode: Mode,
    opponent: &P,
    rng: &mut GameRng,
) -> Result<GameState, MoveError>
where
    P: OpponentPolicy + ?Sized,
{
    validate_move(state, cell)?;

    let mut next = state.clone();
    let mover = next.current_player();
    if place_and_score(&mut next, cell, mover) {
        return Ok(next);
    }

    match mode {
        Mode::TwoPlayer => {
            next.set_current_player(mover.other());
        }
        Mode::SinglePlayer => {
            let choice = opponent.choose_cell(next.board(), rng);
            let reply = match choice {
                Some(c) if next.board().is_empty_at(c) => c,
                _ => return Err(MoveError::IllegalOpponentMove { cell: choice }),
            };
            trace!(policy = opponent.name(), cell = reply, "opponent reply");

            place_and_score(&mut next, reply, Player::Two);
            next.set_current_player(Player::One);
        }
    }

    Ok(next)
}

/// Place a mark and settle the status. Returns true if the game ended.
fn place_and_score(state: &mut GameState, cell: usize, player: Player) -> bool {
    state.place(cell, player);

    if has_win_at(state.board(), cell, player) {
        state.set_status(Status::Won(player));
        true
    } else if state.board().is_full() {
        state.set_status(Status::Draw);
        true
    } else {
        false
    }
}
