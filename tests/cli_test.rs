use std::collections::VecDeque;
use std::io;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    play_turn, Board, Coord, HumanPlayer, InputSource, Orientation, Ship, ShotOutcome,
};

struct ScriptedInput {
    lines: VecDeque<&'static str>,
}

impl ScriptedInput {
    fn new(lines: &[&'static str]) -> Self {
        Self {
            lines: lines.iter().copied().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
        self.lines
            .pop_front()
            .map(String::from)
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

#[test]
fn test_human_input_is_one_indexed() {
    let mut board = Board::new(6, false).unwrap();
    board
        .add_ship(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    board.begin_play();

    let mut player = HumanPlayer::new(ScriptedInput::new(&["1 1"]));
    let mut rng = SmallRng::seed_from_u64(0);
    let outcome = play_turn(&mut player, &mut rng, &mut board).unwrap();
    assert_eq!(outcome, ShotOutcome::Sunk);
}

#[test]
fn test_malformed_and_rejected_input_reprompts() {
    let mut board = Board::new(6, false).unwrap();
    board
        .add_ship(Ship::new(Coord::new(2, 2), 1, Orientation::Horizontal))
        .unwrap();
    board.begin_play();

    // junk lines re-prompt locally; rule rejections re-prompt via the
    // turn loop; "3 3" finally lands on the ship
    let script = ScriptedInput::new(&["", "3", "a b", "1 2 3", "-1 2", "0 0", "9 9", "3 3"]);
    let mut player = HumanPlayer::new(script);
    let mut rng = SmallRng::seed_from_u64(0);
    let outcome = play_turn(&mut player, &mut rng, &mut board).unwrap();
    assert_eq!(outcome, ShotOutcome::Sunk);
}

#[test]
fn test_repeat_target_reprompts() {
    let mut board = Board::new(6, false).unwrap();
    board
        .add_ship(Ship::new(Coord::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    board.begin_play();

    let mut player = HumanPlayer::new(ScriptedInput::new(&["2 2", "2 2", "3 3"]));
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        play_turn(&mut player, &mut rng, &mut board).unwrap(),
        ShotOutcome::Miss
    );
    // second turn: the repeated "2 2" is rejected and "3 3" is used
    assert_eq!(
        play_turn(&mut player, &mut rng, &mut board).unwrap(),
        ShotOutcome::Miss
    );
}

#[test]
fn test_exhausted_input_propagates() {
    let mut board = Board::new(6, false).unwrap();
    board.begin_play();

    let mut player = HumanPlayer::new(ScriptedInput::new(&[]));
    let mut rng = SmallRng::seed_from_u64(0);
    assert!(play_turn(&mut player, &mut rng, &mut board).is_err());
}
