use alloc::vec::Vec;
use core::fmt;

use log::{debug, info, warn};

use crate::{
    board::Board,
    common::{BoardError, FailReason, GuessOutcome, Player},
    config::default_ships,
    coordinate::Coordinate,
    event::{EventLog, GameEvent},
    ship::Ship,
};

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Ships may still be placed.
    NotStarted,
    /// A guess has been attempted; placement is locked.
    InProgress,
    /// No further guesses are accepted.
    Over,
}

/// Result of [`Game::check_winner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    NotEnded,
    PlayerOne,
    PlayerTwo,
    /// Both fleets were destroyed.
    Tie,
    /// The game was ended before either fleet was destroyed.
    Neither,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Winner::NotEnded => "Not Ended",
            Winner::PlayerOne => "Player 1",
            Winner::PlayerTwo => "Player 2",
            Winner::Tie => "Tie",
            Winner::Neither => "Neither",
        };
        f.write_str(s)
    }
}

/// Two-player game: both boards, turn bookkeeping and the event log.
///
/// Rule violations during play never surface as errors; they are returned
/// as [`GuessOutcome::Fail`] and logged like any other guess.
#[derive(Debug, Clone)]
pub struct Game {
    player_one: Board,
    player_two: Board,
    started: bool,
    over: bool,
    log: EventLog,
}

impl Game {
    /// Create a new game with two empty 10x10 boards.
    pub fn new() -> Self {
        Self::from_boards(Board::new(), Board::new())
    }

    /// Create a new game whose boards are `width` by `height`.
    pub fn with_board_size(width: usize, height: usize) -> Result<Self, BoardError> {
        let board = Board::with_dimensions(width, height)?;
        Ok(Self::from_boards(board.clone(), board))
    }

    fn from_boards(player_one: Board, player_two: Board) -> Self {
        Self {
            player_one,
            player_two,
            started: false,
            over: false,
            log: EventLog::new(),
        }
    }

    /// Immutable reference to a player's board.
    pub fn board(&self, player: Player) -> &Board {
        match player {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }

    fn board_mut(&mut self, player: Player) -> &mut Board {
        match player {
            Player::One => &mut self.player_one,
            Player::Two => &mut self.player_two,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.over {
            GameStatus::Over
        } else if self.started {
            GameStatus::InProgress
        } else {
            GameStatus::NotStarted
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Place a copy of `ship` on `player`'s board.
    ///
    /// Returns `false` once any guess has been attempted, or when the board
    /// refuses the placement.
    pub fn set_ship(&mut self, player: Player, ship: &Ship) -> bool {
        if self.started {
            warn!("{} cannot place {}: game already started", player, ship.name());
            return false;
        }
        match self.board_mut(player).set_ship(ship) {
            Ok(_) => true,
            Err(e) => {
                warn!("{} cannot place {}: {}", player, ship.name(), e);
                false
            }
        }
    }

    /// `attacker` guesses `coord` on the opponent's board.
    ///
    /// Any attempt, including a rejected one, starts the game. Exactly one
    /// event is logged per call.
    pub fn guess_location(&mut self, attacker: Player, coord: Coordinate) -> GuessOutcome {
        self.started = true;

        if self.over {
            return self.record(attacker, &coord, GuessOutcome::Fail(FailReason::GameOver));
        }

        let target = self.board_mut(attacker.opponent());
        if target.coordinate_outside_board(&coord) {
            return self.record(attacker, &coord, GuessOutcome::Fail(FailReason::OutsideBoard));
        }

        let sunk_before = target.num_ships_sunk();
        let outcome = match target.guess_location(&coord) {
            Ok(true) => {
                let sunk = target.num_ships_sunk() > sunk_before;
                GuessOutcome::Hit {
                    sunk,
                    won: sunk && target.all_ships_sunk(),
                }
            }
            Ok(false) => GuessOutcome::Miss,
            Err(BoardError::AlreadyGuessed) => GuessOutcome::Fail(FailReason::AlreadyGuessed),
            Err(_) => GuessOutcome::Fail(FailReason::OutsideBoard),
        };
        self.record(attacker, &coord, outcome)
    }

    fn record(&mut self, attacker: Player, coord: &Coordinate, outcome: GuessOutcome) -> GuessOutcome {
        let event = self.log.record(attacker, coord, outcome);
        match outcome {
            GuessOutcome::Fail(_) => warn!("{}", event),
            GuessOutcome::Hit { won: true, .. } => info!("{}", event),
            _ => debug!("{}", event),
        }
        outcome
    }

    /// Latch the game over once either fleet is gone. Has no effect before
    /// the first guess.
    fn check_end_game(&mut self) -> bool {
        if self.started && !self.over {
            self.over = self.player_one.all_ships_sunk() || self.player_two.all_ships_sunk();
            if self.over {
                info!("game over after {} events", self.log.last_number());
            }
        }
        self.over
    }

    /// Decide the winner, ending the game if a fleet has been destroyed.
    pub fn check_winner(&mut self) -> Winner {
        if !self.check_end_game() {
            return Winner::NotEnded;
        }
        match (
            self.player_one.all_ships_sunk(),
            self.player_two.all_ships_sunk(),
        ) {
            (true, true) => Winner::Tie,
            (true, false) => Winner::PlayerTwo,
            (false, true) => Winner::PlayerOne,
            (false, false) => Winner::Neither,
        }
    }

    /// End the game immediately. Repeated calls have no further effect.
    pub fn end_game(&mut self) {
        if !self.over {
            info!("game ended by command");
        }
        self.over = true;
    }

    /// Hits and misses numbered after `since`, in the order they happened.
    /// Failed guesses stay in [`Game::history`] only.
    pub fn new_events(&self, since: u32) -> Vec<&GameEvent> {
        self.log.since(since).collect()
    }

    /// Full log, failed guesses included.
    pub fn history(&self) -> &[GameEvent] {
        self.log.all()
    }

    pub fn board_width(&self, player: Player) -> usize {
        self.board(player).width()
    }

    pub fn board_height(&self, player: Player) -> usize {
        self.board(player).height()
    }

    pub fn is_valid_coordinate(&self, coord: &Coordinate, player: Player) -> bool {
        !self.board(player).coordinate_outside_board(coord)
    }

    /// Snapshot of one cell of `player`'s board.
    pub fn coordinate(&self, player: Player, x: i32, y: i32) -> Result<Coordinate, BoardError> {
        self.board(player).coordinate(x, y)
    }

    /// The roster a player is expected to place, as unplaced templates.
    pub fn all_ships(&self, _player: Player) -> Vec<Ship> {
        default_ships()
    }

    /// Snapshots of the ships on `player`'s board with their positions.
    pub fn placed_ships(&self, player: Player) -> Vec<Ship> {
        self.board(player).ships()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
