use rand::rngs::SmallRng;

use crate::common::{BoardError, Coord, ShotOutcome};
use crate::player::Player;
use crate::ui::InputSource;

/// Human player reading targets from an [`InputSource`].
pub struct HumanPlayer<I: InputSource> {
    input: I,
}

impl<I: InputSource> HumanPlayer<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

/// Parse a move as two 1-indexed numbers, `"row col"`. Returns the
/// 0-indexed coordinate without bounds checking; bounds belong to the
/// board.
fn parse_move(line: &str) -> Option<Coord> {
    let mut tokens = line.split_whitespace();
    let row = tokens.next()?;
    let col = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }
    if !row.bytes().all(|b| b.is_ascii_digit()) || !col.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: i32 = row.parse().ok()?;
    let col: i32 = col.parse().ok()?;
    Some(Coord::new(row - 1, col - 1))
}

impl<I: InputSource> Player for HumanPlayer<I> {
    fn choose_target(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Coord> {
        loop {
            let line = self.input.read_line("Your move: ")?;
            match parse_move(line.trim()) {
                Some(coord) => return Ok(coord),
                None => println!("Enter two numbers, e.g. `3 4`."),
            }
        }
    }

    fn notify_outcome(&mut self, _coord: Coord, outcome: ShotOutcome) {
        println!("{}", outcome);
    }

    fn notify_rejected(&mut self, _coord: Coord, err: &BoardError) {
        println!("{}", err);
    }
}
