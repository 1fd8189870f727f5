//! Top-level match orchestration.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::player::{play_turn, Player};
use crate::ui::render_board;

/// Which side won the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    User,
    Opponent,
}

/// One full match: two boards, two players, alternating turns until one
/// fleet is gone. A hit that does not sink keeps the turn with the
/// shooter.
pub struct Game {
    user: Box<dyn Player>,
    opponent: Box<dyn Player>,
    user_board: Board,
    opponent_board: Board,
    rng: SmallRng,
}

impl Game {
    pub fn new(
        user: Box<dyn Player>,
        user_board: Board,
        opponent: Box<dyn Player>,
        opponent_board: Board,
        rng: SmallRng,
    ) -> Self {
        Self {
            user,
            opponent,
            user_board,
            opponent_board,
            rng,
        }
    }

    /// The user's own board.
    pub fn user_board(&self) -> &Board {
        &self.user_board
    }

    /// The opponent's board.
    pub fn opponent_board(&self) -> &Board {
        &self.opponent_board
    }

    fn greet(&self) {
        println!("-------------------");
        println!("    SEA  BATTLE    ");
        println!("-------------------");
        println!(" move format: x y  ");
        println!(" x - row number    ");
        println!(" y - column number ");
    }

    fn print_boards(&self) {
        println!("{}", "-".repeat(20));
        println!("Your board:");
        print!("{}", render_board(&self.user_board));
        println!("{}", "-".repeat(20));
        println!("Opponent board:");
        print!("{}", render_board(&self.opponent_board));
        println!("{}", "-".repeat(40));
    }

    /// Run the match to completion and return the winner.
    pub fn run(&mut self) -> anyhow::Result<Winner> {
        self.greet();
        let mut turn = 0usize;
        loop {
            self.print_boards();
            let outcome = if turn % 2 == 0 {
                println!("Your turn!");
                play_turn(self.user.as_mut(), &mut self.rng, &mut self.opponent_board)?
            } else {
                println!("Opponent's turn!");
                play_turn(self.opponent.as_mut(), &mut self.rng, &mut self.user_board)?
            };
            if self.opponent_board.defeat() {
                self.print_boards();
                println!("You win!");
                return Ok(Winner::User);
            }
            if self.user_board.defeat() {
                self.print_boards();
                println!("Opponent wins!");
                return Ok(Winner::Opponent);
            }
            if !outcome.repeat_turn() {
                turn += 1;
            }
        }
    }
}
