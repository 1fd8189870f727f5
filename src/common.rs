//! Common types: coordinates, shot outcomes and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// A grid position as `(row, col)`, 0-indexed.
///
/// Fields are signed so that values produced by user input or neighbor
/// arithmetic may fall outside the grid; the board is the bounds authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// This coordinate shifted by `(dr, dc)`.
    pub fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Coord {
    /// User-facing 1-indexed form, matching the move input format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Result of resolving a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Hit an afloat ship without sinking it.
    Hit,
    /// Hit the last intact cell of a ship.
    Sunk,
    /// Hit open water.
    Miss,
}

impl ShotOutcome {
    /// A hit that does not sink grants the shooter another move.
    pub fn repeat_turn(&self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Hit => write!(f, "Hit!"),
            ShotOutcome::Sunk => write!(f, "Ship sunk!"),
            ShotOutcome::Miss => write!(f, "Miss."),
        }
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Shot coordinate outside the grid.
    OutOfBounds { coord: Coord },
    /// Shot at a cell that was already targeted this game.
    AlreadyTargeted { coord: Coord },
    /// Ship placement leaves the grid or touches an existing ship.
    InvalidPlacement,
    /// Global attempt ceiling reached while placing a fleet.
    PlacementBudgetExhausted,
    /// Mask layer failure (board larger than the backing integer).
    Mask(BitBoardError),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::Mask(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { coord } => {
                write!(f, "shot at {} lands outside the board", coord)
            }
            BoardError::AlreadyTargeted { coord } => {
                write!(f, "cell {} was already fired at", coord)
            }
            BoardError::InvalidPlacement => {
                write!(f, "ship placement leaves the board or touches another ship")
            }
            BoardError::PlacementBudgetExhausted => {
                write!(f, "placement attempt budget exhausted")
            }
            BoardError::Mask(e) => write!(f, "mask error: {}", e),
        }
    }
}

impl std::error::Error for BoardError {}
