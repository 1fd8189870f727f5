//! Randomized fleet placement.
//!
//! Placement is rejection sampling: a random bow and orientation per ship,
//! retried on invalid placement under one global attempt budget. Local
//! retries can paint a small grid into a corner, so exhausting the budget
//! discards the whole board and starts over on a fresh one.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord};
use crate::config::PLACEMENT_BUDGET;
use crate::ship::{Orientation, Ship};

/// Build a fully placed board ready for combat, restarting from scratch
/// whenever the attempt budget runs out. Fails only when a board of this
/// size cannot be constructed at all.
pub fn generate_board<R: Rng>(
    rng: &mut R,
    n: usize,
    lengths: &[usize],
    hidden: bool,
) -> Result<Board, BoardError> {
    loop {
        match try_board(rng, n, lengths, hidden) {
            Ok(board) => return Ok(board),
            Err(BoardError::PlacementBudgetExhausted) => {
                debug!("placement budget exhausted, regenerating board");
                continue;
            }
            Err(err) => return Err(err),
        }
    }
}

/// One placement pass over a fresh board: each length in order, sampled
/// until it fits or the shared budget runs out. Calls `begin_play` on the
/// finished board.
pub fn try_board<R: Rng>(
    rng: &mut R,
    n: usize,
    lengths: &[usize],
    hidden: bool,
) -> Result<Board, BoardError> {
    let mut board = Board::new(n, hidden)?;
    let mut attempts = 0usize;
    for &length in lengths {
        loop {
            attempts += 1;
            if attempts > PLACEMENT_BUDGET {
                return Err(BoardError::PlacementBudgetExhausted);
            }
            let bow = Coord::new(rng.random_range(0..n as i32), rng.random_range(0..n as i32));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match board.add_ship(Ship::new(bow, length, orientation)) {
                Ok(()) => break,
                Err(BoardError::InvalidPlacement) => continue,
                Err(err) => return Err(err),
            }
        }
    }
    board.begin_play();
    Ok(board)
}
