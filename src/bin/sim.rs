use battleship_engine::{
    fleet, init_logging, Coordinate, Game, GuessOutcome, Player, Winner, BOARD_SIZE,
};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;

/// Shuffled list of every cell on a standard board.
fn firing_order(rng: &mut SmallRng) -> Vec<Coordinate> {
    let mut cells: Vec<Coordinate> = (0..BOARD_SIZE as i32)
        .flat_map(|y| (0..BOARD_SIZE as i32).map(move |x| Coordinate::new(x, y)))
        .collect();
    cells.shuffle(rng);
    cells
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut game = Game::new();
    fleet::place_standard_fleet(&mut game, Player::One, &mut rng1)?;
    fleet::place_standard_fleet(&mut game, Player::Two, &mut rng2)?;

    let mut salvo1 = firing_order(&mut rng1).into_iter();
    let mut salvo2 = firing_order(&mut rng2).into_iter();
    let mut guesses = [0usize; 2];

    // Each side fires every cell once at most, so the loop always ends.
    'play: loop {
        for (player, salvo) in [(Player::One, &mut salvo1), (Player::Two, &mut salvo2)] {
            let Some(coord) = salvo.next() else {
                break 'play;
            };
            guesses[if player.is_one() { 0 } else { 1 }] += 1;
            if let GuessOutcome::Hit { won: true, .. } = game.guess_location(player, coord) {
                break 'play;
            }
        }
    }

    let winner = match game.check_winner() {
        Winner::PlayerOne => Some("player1"),
        Winner::PlayerTwo => Some("player2"),
        Winner::Tie => Some("tie"),
        Winner::NotEnded | Winner::Neither => None,
    };

    let result = json!({
        "player1": {
            "guesses": guesses[0],
            "ships_sunk": game.board(Player::Two).num_ships_sunk(),
        },
        "player2": {
            "guesses": guesses[1],
            "ships_sunk": game.board(Player::One).num_ships_sunk(),
        },
        "events": game.history().len(),
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
