use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{BoardError, Coord, ShotOutcome};
use crate::player::Player;

/// Computer player firing at uniformly random cells.
///
/// Keeps no memory of past shots; re-sampling an already targeted cell is
/// absorbed by the retry loop in [`play_turn`](crate::play_turn).
pub struct ComputerPlayer {
    board_size: usize,
}

impl ComputerPlayer {
    pub fn new(board_size: usize) -> Self {
        Self { board_size }
    }
}

impl Player for ComputerPlayer {
    fn choose_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Coord> {
        let n = self.board_size as i32;
        let target = Coord::new(rng.random_range(0..n), rng.random_range(0..n));
        println!("Computer fires at {}", target);
        Ok(target)
    }

    fn notify_outcome(&mut self, _coord: Coord, outcome: ShotOutcome) {
        println!("{}", outcome);
    }

    fn notify_rejected(&mut self, coord: Coord, err: &BoardError) {
        debug!("computer shot at {} rejected: {}", coord, err);
    }
}
