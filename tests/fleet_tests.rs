use battleship_engine::fleet::{place_random_fleet, place_standard_fleet, random_placement};
use battleship_engine::{Board, Game, Player, ShipType, SHIPS, TOTAL_SHIP_CELLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn occupied(board: &Board) -> usize {
    board.cells().iter().filter(|c| c.is_occupied()).count()
}

#[test]
fn test_random_placement_single_ship() {
    let board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    let ship = random_placement(&board, &mut rng, SHIPS[0]).unwrap();
    assert_eq!(ship.name(), "Carrier");
    assert_eq!(ship.len(), 5);
    assert!(ship
        .coordinates()
        .iter()
        .all(|c| !board.coordinate_outside_board(c)));
}

#[test]
fn test_random_fleet_no_overlap() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(7);
    place_random_fleet(&mut board, &mut rng).unwrap();
    assert_eq!(board.num_ships(), SHIPS.len());
    assert_eq!(occupied(&board), TOTAL_SHIP_CELLS);
}

#[test]
fn test_standard_fleet_through_game() {
    let mut game = Game::new();
    let mut rng = SmallRng::seed_from_u64(3);
    place_standard_fleet(&mut game, Player::One, &mut rng).unwrap();
    place_standard_fleet(&mut game, Player::Two, &mut rng).unwrap();

    let names: Vec<String> = game
        .placed_ships(Player::Two)
        .iter()
        .map(|s| s.name().to_string())
        .collect();
    assert_eq!(
        names,
        ["Carrier", "Battleship", "Cruiser", "Submarine", "Destroyer"]
    );

    game.guess_location(Player::One, (0, 0).into());
    assert!(place_standard_fleet(&mut game, Player::One, &mut rng).is_err());
}

#[test]
fn test_narrow_board_forces_orientation() {
    let board = Board::with_dimensions(1, 6).unwrap();
    let mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..20 {
        let ship = random_placement(&board, &mut rng, SHIPS[1]).unwrap();
        assert!(ship.coordinates().iter().all(|c| c.x() == 0));
    }
    assert!(random_placement(&board, &mut rng, ShipType::new("Huge", 7)).is_err());
}
