use alloc::vec::Vec;

use crate::common::{ArgumentError, BoardError};
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// Default board edge length.
pub const BOARD_SIZE: usize = 10;
/// Maximum number of cells a single ship may span.
pub const SIZE_LIMIT: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard roster.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Roster entry: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Template ship laid downwards from (0,0), not bound to any board.
    ///
    /// Runs the same checks as [`Ship::new`], so a zero-length or
    /// over-long entry yields an error instead of a ship.
    pub fn template(&self) -> Result<Ship, BoardError> {
        if self.length == 0 {
            return Err(ArgumentError::EmptyShip.into());
        }
        let last = i32::try_from(self.length - 1).map_err(|_| ArgumentError::TooLong {
            span: self.length,
        })?;
        Ship::new(self.name, Coordinate::new(0, 0), Coordinate::new(0, last))
    }
}

/// Look up a roster entry by its canonical name.
pub fn ship_type_by_name(name: &str) -> Option<ShipType> {
    SHIPS.iter().copied().find(|def| def.name() == name)
}

/// The standard roster as unplaced template ships.
pub fn default_ships() -> Vec<Ship> {
    SHIPS.iter().filter_map(|def| def.template().ok()).collect()
}
