use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    generate_board, init_logging, ComputerPlayer, Game, HumanPlayer, Player, StdinInput,
    DEFAULT_BOARD_SIZE, FLEET, MAX_BOARD_SIZE,
};

/// Console sea battle against the computer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board dimension.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_size)]
    size: usize,

    /// Fix the RNG seed for reproducible games (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,

    /// Watch a computer vs. computer game instead of playing.
    #[arg(long)]
    auto: bool,
}

fn parse_size(arg: &str) -> Result<usize, String> {
    let n: usize = arg.parse().map_err(|_| String::from("not a number"))?;
    if (DEFAULT_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&n) {
        Ok(n)
    } else {
        Err(format!(
            "board size must be between {} and {}",
            DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE
        ))
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let user_board = generate_board(&mut rng, cli.size, &FLEET, false)?;
    let opponent_board = generate_board(&mut rng, cli.size, &FLEET, true)?;

    let user: Box<dyn Player> = if cli.auto {
        Box::new(ComputerPlayer::new(cli.size))
    } else {
        Box::new(HumanPlayer::new(StdinInput))
    };
    let opponent = Box::new(ComputerPlayer::new(cli.size));

    let mut game = Game::new(user, user_board, opponent, opponent_board, rng);
    game.run()?;
    Ok(())
}
