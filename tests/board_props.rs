use battleship_engine::fleet::place_random_fleet;
use battleship_engine::{Board, BoardError, Coordinate, Ship, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    place_random_fleet(&mut board, &mut rng).unwrap();
    board
}

fn cell_state(board: &Board) -> Vec<(bool, bool)> {
    board
        .cells()
        .iter()
        .map(|c| (c.is_guessed(), c.is_occupied()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn second_guess_rejected_without_change(
        seed in any::<u64>(),
        x in 0..BOARD_SIZE as i32,
        y in 0..BOARD_SIZE as i32,
    ) {
        let mut board = random_board(seed);
        let coord = Coordinate::new(x, y);
        let hit = board.guess_location(&coord).unwrap();
        prop_assert_eq!(hit, board.coordinate(x, y).unwrap().is_occupied());
        let after = cell_state(&board);
        prop_assert_eq!(board.guess_location(&coord).unwrap_err(), BoardError::AlreadyGuessed);
        prop_assert_eq!(cell_state(&board), after);
        prop_assert!(board.coordinate(x, y).unwrap().is_guessed());
    }

    /// Rejected placements never write a single cell.
    #[test]
    fn placement_is_all_or_nothing(
        seed in any::<u64>(),
        x in -3i32..13,
        y in -3i32..13,
        len in 1i32..=6,
        vertical in any::<bool>(),
    ) {
        let mut board = random_board(seed);
        let end = if vertical { Coordinate::new(x, y + len - 1) } else { Coordinate::new(x + len - 1, y) };
        let ship = Ship::new("probe", Coordinate::new(x, y), end).unwrap();
        let before = cell_state(&board);
        let ships_before = board.num_ships();
        match board.set_ship(&ship) {
            Ok(_) => {
                prop_assert_eq!(board.num_ships(), ships_before + 1);
                for c in ship.coordinates() {
                    prop_assert!(board.coordinate(c.x(), c.y()).unwrap().is_occupied());
                }
            }
            Err(BoardError::InvalidPlacement(_)) => {
                prop_assert_eq!(cell_state(&board), before);
                prop_assert_eq!(board.num_ships(), ships_before);
            }
            Err(e) => prop_assert!(false, "unexpected error {:?}", e),
        }
    }

    /// Sinking every occupied cell sinks the whole fleet, one ship at a time.
    #[test]
    fn sunk_count_is_monotonic(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let mut sunk = 0;
        for y in 0..BOARD_SIZE as i32 {
            for x in 0..BOARD_SIZE as i32 {
                board.guess_location(&Coordinate::new(x, y)).unwrap();
                let now = board.num_ships_sunk();
                prop_assert!(now == sunk || now == sunk + 1);
                sunk = now;
            }
        }
        prop_assert!(board.all_ships_sunk());
        prop_assert_eq!(sunk, board.num_ships());
    }
}
