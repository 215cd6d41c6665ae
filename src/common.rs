//! Common types for the engine: players, guess outcomes and board errors.

use core::fmt;

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn is_one(self) -> bool {
        self == Player::One
    }

    /// Boolean form used by callers that track turns as a flag.
    pub fn from_is_one(is_one: bool) -> Self {
        if is_one {
            Player::One
        } else {
            Player::Two
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Why a guess was rejected by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FailReason {
    GameOver,
    OutsideBoard,
    AlreadyGuessed,
}

impl FailReason {
    /// Stable reason string, suitable for display and assertions.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailReason::GameOver => "game over",
            FailReason::OutsideBoard => "outside board",
            FailReason::AlreadyGuessed => "already guessed",
        }
    }
}

impl fmt::Display for FailReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified result of a guess made through the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessOutcome {
    /// Guess struck a ship. `sunk` is set when the hit finished a ship,
    /// `won` when it also finished the target's fleet.
    Hit { sunk: bool, won: bool },
    /// Guess landed in open water.
    Miss,
    /// Guess was rejected; nothing on the target board changed.
    Fail(FailReason),
}

impl GuessOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, GuessOutcome::Hit { .. })
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, GuessOutcome::Fail(_))
    }

    /// Detail string recorded alongside the outcome in the event log.
    pub fn detail(&self) -> &'static str {
        match self {
            GuessOutcome::Hit { won: true, .. } => "win",
            GuessOutcome::Hit { sunk: true, .. } => "sunk",
            GuessOutcome::Hit { .. } | GuessOutcome::Miss => "",
            GuessOutcome::Fail(reason) => reason.as_str(),
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessOutcome::Hit { won: true, .. } => write!(f, "HIT: sunk the last ship and won"),
            GuessOutcome::Hit { sunk: true, .. } => write!(f, "HIT: sunk a ship"),
            GuessOutcome::Hit { .. } => write!(f, "HIT"),
            GuessOutcome::Miss => write!(f, "MISS"),
            GuessOutcome::Fail(reason) => write!(f, "FAIL: {}", reason),
        }
    }
}

/// Reasons a ship placement was refused by a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some target coordinate lies outside the board.
    OutsideBoard,
    /// Some target coordinate already holds a ship.
    Occupied,
    /// Some target coordinate has already been guessed.
    AlreadyGuessed,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutsideBoard => write!(f, "coordinate(s) outside of board area"),
            PlacementError::Occupied => write!(f, "coordinate(s) already occupied by another ship"),
            PlacementError::AlreadyGuessed => write!(f, "coordinate(s) already previously guessed"),
        }
    }
}

/// Malformed input handed to a constructor or a board query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    /// A ship needs at least one coordinate.
    EmptyShip,
    /// Consecutive coordinates share neither x nor y.
    NotLinear,
    /// Coordinates skip cells or double back along the line.
    NotContiguous,
    /// Span exceeds `SIZE_LIMIT` cells.
    TooLong { span: usize },
    /// Guess coordinate lies outside the board.
    OutsideBoard { x: i32, y: i32 },
    /// Board dimensions cannot be addressed with `i32` coordinates.
    BoardSize { width: usize, height: usize },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::EmptyShip => write!(f, "ship must occupy at least one coordinate"),
            ArgumentError::NotLinear => {
                write!(f, "coordinates must lie on the same x-line or y-line; no diagonals")
            }
            ArgumentError::NotContiguous => {
                write!(f, "coordinates must form an unbroken run in one direction")
            }
            ArgumentError::TooLong { span } => write!(
                f,
                "ship spans {} coordinates, more than the limit of {}",
                span,
                crate::config::SIZE_LIMIT
            ),
            ArgumentError::OutsideBoard { x, y } => {
                write!(f, "coordinate ({},{}) outside of board area", x, y)
            }
            ArgumentError::BoardSize { width, height } => {
                write!(f, "board of {}x{} cells is too large", width, height)
            }
        }
    }
}

/// Errors returned by Coordinate, Ship and Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship or cell target is not usable on this board.
    InvalidPlacement(PlacementError),
    /// Guess was already made at this position.
    AlreadyGuessed,
    /// Malformed input; a caller bug rather than a rule violation.
    InvalidArgument(ArgumentError),
}

impl From<PlacementError> for BoardError {
    fn from(err: PlacementError) -> Self {
        BoardError::InvalidPlacement(err)
    }
}

impl From<ArgumentError> for BoardError {
    fn from(err: ArgumentError) -> Self {
        BoardError::InvalidArgument(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidPlacement(e) => write!(f, "Invalid placement: {}", e),
            BoardError::AlreadyGuessed => write!(f, "Coordinate has already been guessed"),
            BoardError::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
