use battleship_engine::{
    Coordinate, EventKind, EventLog, FailReason, GuessOutcome, Player,
};

#[test]
fn test_log_numbers_from_one() {
    let mut log = EventLog::new();
    assert!(log.is_empty());
    assert_eq!(log.last_number(), 0);

    let first = log
        .record(Player::One, &Coordinate::new(1, 1), GuessOutcome::Miss)
        .number();
    let second = log
        .record(
            Player::Two,
            &Coordinate::new(1, 1),
            GuessOutcome::Fail(FailReason::OutsideBoard),
        )
        .number();
    assert_eq!((first, second), (1, 2));
    assert_eq!(log.len(), 2);
    assert_eq!(log.last_number(), 2);
}

#[test]
fn test_coordinate_is_stripped() {
    let mut log = EventLog::new();
    let mut guessed = Coordinate::new(4, 2);
    guessed.guess_coordinate().unwrap();
    let event = log.record(
        Player::One,
        &guessed,
        GuessOutcome::Hit {
            sunk: false,
            won: false,
        },
    );
    assert_eq!(event.coordinate(), Coordinate::new(4, 2));
    assert!(!event.coordinate().is_guessed());
    assert!(!event.coordinate().is_occupied());
}

#[test]
fn test_extra_info_and_victim() {
    let mut log = EventLog::new();
    let at = Coordinate::new(0, 0);
    log.record(Player::One, &at, GuessOutcome::Hit { sunk: true, won: true });
    log.record(Player::Two, &at, GuessOutcome::Hit { sunk: true, won: false });
    log.record(Player::One, &at, GuessOutcome::Hit { sunk: false, won: false });
    log.record(Player::Two, &at, GuessOutcome::Miss);
    log.record(Player::One, &at, GuessOutcome::Fail(FailReason::GameOver));

    let info: Vec<&str> = log.all().iter().map(|e| e.extra_info()).collect();
    assert_eq!(info, ["win", "sunk", "", "", "game over"]);

    let first = &log.all()[0];
    assert_eq!(first.kind(), EventKind::Hit);
    assert_eq!(first.attacker(), Player::One);
    assert_eq!(first.victim(), Player::Two);
    assert_eq!(first.details(), ["win".to_string()]);
    assert_eq!(first.to_string(), "#1 Player 1 -> (0,0) HIT (win)");
    assert_eq!(log.all()[3].to_string(), "#4 Player 2 -> (0,0) MISS");
}

#[test]
fn test_since_filters_failures() {
    let mut log = EventLog::new();
    let at = Coordinate::new(3, 3);
    log.record(Player::One, &at, GuessOutcome::Miss);
    log.record(Player::One, &at, GuessOutcome::Fail(FailReason::AlreadyGuessed));
    log.record(Player::Two, &at, GuessOutcome::Miss);

    let numbers: Vec<u32> = log.since(0).map(|e| e.number()).collect();
    assert_eq!(numbers, [1, 3]);
    let numbers: Vec<u32> = log.since(1).map(|e| e.number()).collect();
    assert_eq!(numbers, [3]);
    assert_eq!(log.since(3).count(), 0);
}

#[test]
fn test_event_serializes() {
    let mut log = EventLog::new();
    log.record(
        Player::Two,
        &Coordinate::new(7, 1),
        GuessOutcome::Fail(FailReason::OutsideBoard),
    );
    let json = serde_json::to_value(&log.all()[0]).unwrap();
    assert_eq!(json["number"], 1);
    assert_eq!(json["kind"], "Fail");
    assert_eq!(json["attacker"], "Two");
    assert_eq!(json["details"][0], "outside board");
}
