//! Board state: ship placements, the busy set and shot resolution.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coord, ShotOutcome};
use crate::ship::Ship;

/// Mask type used for board cell sets. `u128` holds boards up to 11×11.
pub type Mask = BitBoard<u128>;

/// Which operations the board currently accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Placement,
    Combat,
}

/// One side's grid: placed ships, hit/miss marks and the busy set.
///
/// The busy set leads two lives. While ships are being placed it holds
/// every occupied cell plus the buffer ring around each ship, which is
/// what enforces the no-touching rule for later placements. `begin_play`
/// resets it, and during combat it is the log of targeted cells.
#[derive(Debug)]
pub struct Board {
    n: usize,
    hidden: bool,
    phase: Phase,
    ships: Vec<Ship>,
    destroyed: usize,
    ship_map: Mask,
    hits: Mask,
    misses: Mask,
    busy: Mask,
}

impl Board {
    /// Create an empty board in the placement phase. Fails when `n`×`n`
    /// exceeds the mask capacity.
    pub fn new(n: usize, hidden: bool) -> Result<Self, BoardError> {
        let empty = Mask::new(n)?;
        Ok(Board {
            n,
            hidden,
            phase: Phase::Placement,
            ships: Vec::new(),
            destroyed: 0,
            ship_map: empty,
            hits: empty,
            misses: empty,
            busy: empty,
        })
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Whether ship glyphs are masked when this board is rendered.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships reduced to zero hit points.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    /// Occupancy mask of all placed ships.
    pub fn ship_map(&self) -> Mask {
        self.ship_map
    }

    /// Cells where a shot struck a ship.
    pub fn hits(&self) -> Mask {
        self.hits
    }

    /// Cells marked as water: misses plus revealed buffer rings.
    pub fn misses(&self) -> Mask {
        self.misses
    }

    /// Whether `coord` falls outside the grid.
    pub fn is_out(&self, coord: Coord) -> bool {
        coord.row < 0 || coord.col < 0 || coord.row >= self.n as i32 || coord.col >= self.n as i32
    }

    /// Mark every in-bounds cell of `cells` and their 8-neighborhoods as
    /// busy, skipping cells that already are. With `mark` the affected
    /// cells also get the water glyph, revealing the ring around a wreck.
    fn buffer_zone(&mut self, cells: &[Coord], mark: bool) {
        for cell in cells {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let cur = cell.offset(dr, dc);
                    if self.is_out(cur) {
                        continue;
                    }
                    let (r, c) = (cur.row as usize, cur.col as usize);
                    if self.busy.get(r, c).unwrap_or(true) {
                        continue;
                    }
                    let _ = self.busy.set(r, c);
                    if mark {
                        let _ = self.misses.set(r, c);
                    }
                }
            }
        }
    }

    /// Place `ship`, rejecting any placement that leaves the grid or
    /// intersects the busy set.
    ///
    /// On success the ship's cells and its buffer ring join the busy set,
    /// so a later placement that touches this ship is rejected.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        assert!(self.phase == Phase::Placement, "add_ship after begin_play");
        let cells: Vec<Coord> = ship.cells().collect();
        let mut mask = Mask::new(self.n)?;
        for &cell in &cells {
            if self.is_out(cell) {
                return Err(BoardError::InvalidPlacement);
            }
            mask.set(cell.row as usize, cell.col as usize)?;
        }
        if !(self.busy & mask).is_empty() {
            return Err(BoardError::InvalidPlacement);
        }
        self.ship_map |= mask;
        self.busy |= mask;
        self.ships.push(ship);
        self.buffer_zone(&cells, false);
        Ok(())
    }

    /// Switch from placement to combat. The busy set becomes the shot log
    /// and starts empty. Must be called exactly once.
    pub fn begin_play(&mut self) {
        assert!(self.phase == Phase::Placement, "begin_play called twice");
        self.busy.clear_all();
        self.phase = Phase::Combat;
    }

    /// Resolve a shot at `coord`.
    ///
    /// A repeated or out-of-bounds target is a reported error, never a
    /// silent no-op. Sinking a ship reveals the water ring around it.
    pub fn resolve_shot(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        assert!(self.phase == Phase::Combat, "resolve_shot before begin_play");
        if self.is_out(coord) {
            return Err(BoardError::OutOfBounds { coord });
        }
        let (r, c) = (coord.row as usize, coord.col as usize);
        if self.busy.get(r, c)? {
            return Err(BoardError::AlreadyTargeted { coord });
        }
        self.busy.set(r, c)?;

        if let Some(idx) = self.ships.iter().position(|s| s.contains(coord)) {
            self.ships[idx].register_hit();
            self.hits.set(r, c)?;
            if self.ships[idx].is_sunk() {
                self.destroyed += 1;
                let cells: Vec<Coord> = self.ships[idx].cells().collect();
                self.buffer_zone(&cells, true);
                return Ok(ShotOutcome::Sunk);
            }
            return Ok(ShotOutcome::Hit);
        }

        self.misses.set(r, c)?;
        Ok(ShotOutcome::Miss)
    }

    /// All ships destroyed.
    pub fn defeat(&self) -> bool {
        self.destroyed == self.ships.len()
    }
}
