#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_engine::{
    fleet, init_logging,
    ui::{parse_coordinate, render_board, render_event},
    Game, GuessOutcome, Player, Winner, BOARD_SIZE,
};
#[cfg(feature = "std")]
use clap::{builder::RangedU64ValueParser, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

/// Largest board edge accepted on the command line.
#[cfg(feature = "std")]
const MAX_DIMENSION: u64 = 100;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Two players take turns at one terminal; fleets are placed at random.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(
            long,
            default_value_t = BOARD_SIZE,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_DIMENSION)
        )]
        width: usize,
        #[arg(
            long,
            default_value_t = BOARD_SIZE,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_DIMENSION)
        )]
        height: usize,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            width,
            height,
        } => {
            let mut rng = match seed {
                Some(s) => {
                    println!("Using fixed seed: {} (fleets will be reproducible)", s);
                    SmallRng::seed_from_u64(s)
                }
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let mut game = Game::with_board_size(width, height)?;
            fleet::place_standard_fleet(&mut game, Player::One, &mut rng)?;
            fleet::place_standard_fleet(&mut game, Player::Two, &mut rng)?;
            run_hot_seat(&mut game, io::stdin().lock())?;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn run_hot_seat(game: &mut Game, mut input: impl BufRead) -> anyhow::Result<()> {
    let mut player = Player::One;
    let mut cursor = 0;
    loop {
        println!("\n=== {} ===", player);
        println!("Opponent waters:");
        print!("{}", render_board(game.board(player.opponent()), false));
        println!("Your fleet:");
        print!("{}", render_board(game.board(player), true));
        print!("Enter guess as \"x y\" (or \"quit\"): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim() == "quit" {
            game.end_game();
            break;
        }
        let Some(coord) = parse_coordinate(&line) else {
            println!("Invalid coordinate");
            continue;
        };

        let outcome = game.guess_location(player, coord);
        for event in game.new_events(cursor) {
            println!("{}", render_event(event));
        }
        cursor = game.history().last().map_or(cursor, |e| e.number());

        match outcome {
            GuessOutcome::Fail(reason) => println!("Try again: {}", reason),
            GuessOutcome::Hit { won: true, .. } => break,
            _ => player = player.opponent(),
        }
    }

    match game.check_winner() {
        Winner::NotEnded => {}
        Winner::Neither => println!("\nGame abandoned."),
        winner => println!("\nGAME OVER: {}", winner),
    }
    Ok(())
}
