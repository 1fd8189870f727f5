//! Ship geometry and hit points.

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Per-cell step along the ship's axis as `(d_row, d_col)`.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A straight run of cells sharing one pool of hit points.
///
/// The occupied cells are derived from the bow, length and orientation and
/// recomputed on demand; only the hit points change after placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    bow: Coord,
    length: usize,
    orientation: Orientation,
    hp: usize,
}

impl Ship {
    /// A ship of `length` cells extending from `bow` along `orientation`.
    pub fn new(bow: Coord, length: usize, orientation: Orientation) -> Self {
        assert!(length >= 1, "ship length must be at least 1");
        Ship {
            bow,
            length,
            orientation,
            hp: length,
        }
    }

    pub fn bow(&self) -> Coord {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Remaining hit points.
    pub fn hp(&self) -> usize {
        self.hp
    }

    pub fn is_sunk(&self) -> bool {
        self.hp == 0
    }

    /// The cells the ship occupies, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let bow = self.bow;
        let (dr, dc) = self.orientation.step();
        (0..self.length as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// Whether `coord` is one of the occupied cells.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Remove one hit point. Invoked by the board when a shot lands.
    pub(crate) fn register_hit(&mut self) {
        debug_assert!(self.hp > 0, "hit on an already sunk ship");
        self.hp -= 1;
    }
}
