//! Grid positions and the per-cell guess/occupancy flags.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::common::BoardError;

/// Index of a ship inside the board that placed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A position on a board, plus whether it was guessed and which ship
/// (if any) claimed it.
///
/// Equality and hashing only look at `(x, y)`, so a freshly built
/// coordinate can be used to look up a cell that carries state.
/// Bounds are not checked here; whether a position is valid depends on
/// the board it is used with.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    x: i32,
    y: i32,
    guessed: bool,
    occupant: Option<ShipId>,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            guessed: false,
            occupant: None,
        }
    }

    /// Build a coordinate with explicit guessed/occupied state.
    pub const fn with_state(x: i32, y: i32, guessed: bool, occupant: Option<ShipId>) -> Self {
        Self {
            x,
            y,
            guessed,
            occupant,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn is_guessed(&self) -> bool {
        self.guessed
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn occupant(&self) -> Option<ShipId> {
        self.occupant
    }

    /// Same position with no guess or ship attached.
    pub fn stripped(&self) -> Self {
        Self::new(self.x, self.y)
    }

    /// Claim this coordinate for `ship`. A coordinate can be claimed once;
    /// later attempts return `false` and leave it untouched.
    pub fn set_ship(&mut self, ship: ShipId) -> bool {
        if self.is_occupied() {
            return false;
        }
        self.occupant = Some(ship);
        true
    }

    /// Mark the coordinate guessed, returning `true` on a hit.
    ///
    /// A second guess is a caller bug and is reported as
    /// [`BoardError::AlreadyGuessed`] without changing any state.
    pub fn guess_coordinate(&mut self) -> Result<bool, BoardError> {
        if self.guessed {
            return Err(BoardError::AlreadyGuessed);
        }
        self.guessed = true;
        Ok(self.is_occupied())
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
