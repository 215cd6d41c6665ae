//! Game board: a grid of coordinates and the ships placed on it.

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use log::debug;

use crate::common::{ArgumentError, BoardError, PlacementError};
use crate::config::{BOARD_SIZE, SIZE_LIMIT};
use crate::coordinate::{Coordinate, ShipId};
use crate::ship::Ship;

/// A ship as stored by the board: its name and the grid cells it claims.
#[derive(Debug, Clone)]
struct PlacedShip {
    name: String,
    cells: Vec<usize>,
    sunk: Cell<bool>,
}

impl PlacedShip {
    fn is_sunk(&self, grid: &[Coordinate]) -> bool {
        if !self.sunk.get() {
            if !self.cells.iter().all(|&i| grid[i].is_guessed()) {
                return false;
            }
            self.sunk.set(true);
        }
        true
    }
}

/// Fixed-size grid owning every cell and every placed ship.
///
/// Cells are stored row-major; a cell's `occupant` is the [`ShipId`] of the
/// ship that claimed it. Ships never leave the board except through
/// [`Board::reset_coordinate`] clearing all of their cells.
#[derive(Clone)]
pub struct Board {
    width: usize,
    height: usize,
    grid: Vec<Coordinate>,
    ships: Vec<Option<PlacedShip>>,
}

impl Board {
    /// Create an empty 10x10 board.
    pub fn new() -> Self {
        Self::build(BOARD_SIZE as i32, BOARD_SIZE as i32)
    }

    /// Create an empty board of `width` columns and `height` rows.
    ///
    /// Each dimension must fit in an `i32` coordinate and the cell count
    /// in a `usize`.
    pub fn with_dimensions(width: usize, height: usize) -> Result<Self, BoardError> {
        let too_large = ArgumentError::BoardSize { width, height };
        let w = i32::try_from(width).map_err(|_| too_large)?;
        let h = i32::try_from(height).map_err(|_| too_large)?;
        width.checked_mul(height).ok_or(too_large)?;
        Ok(Self::build(w, h))
    }

    fn build(width: i32, height: i32) -> Self {
        let grid = (0..height)
            .flat_map(|y| (0..width).map(move |x| Coordinate::new(x, y)))
            .collect();
        Board {
            width: width as usize,
            height: height as usize,
            grid,
            ships: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only view of every cell, row by row.
    pub fn cells(&self) -> &[Coordinate] {
        &self.grid
    }

    /// Returns `true` when `coord` does not address a cell of this board.
    pub fn coordinate_outside_board(&self, coord: &Coordinate) -> bool {
        self.index_of(coord.x(), coord.y()).is_none()
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }

    /// Place a copy of `ship` on the board.
    ///
    /// Every target cell must be on the board, unoccupied and unguessed.
    /// All cells are checked before any is written, so a rejected ship
    /// leaves the board untouched.
    ///
    /// Ship ids are never reused: a ship removed by
    /// [`Board::reset_coordinate`] leaves an empty slot behind.
    pub fn set_ship(&mut self, ship: &Ship) -> Result<ShipId, BoardError> {
        if ship.is_empty() {
            return Err(ArgumentError::EmptyShip.into());
        }
        if ship.len() > SIZE_LIMIT {
            return Err(ArgumentError::TooLong { span: ship.len() }.into());
        }
        let mut cells = Vec::with_capacity(ship.len());
        for c in ship.coordinates() {
            let i = self
                .index_of(c.x(), c.y())
                .ok_or(PlacementError::OutsideBoard)?;
            if self.grid[i].is_occupied() || cells.contains(&i) {
                return Err(PlacementError::Occupied.into());
            }
            if self.grid[i].is_guessed() {
                return Err(PlacementError::AlreadyGuessed.into());
            }
            cells.push(i);
        }

        let id = ShipId(self.ships.len());
        for &i in &cells {
            let claimed = self.grid[i].set_ship(id);
            debug_assert!(claimed, "cell {} was checked free", i);
        }
        debug!("placed {} on {} cells as ship #{}", ship.name(), cells.len(), id.index());
        self.ships.push(Some(PlacedShip {
            name: String::from(ship.name()),
            cells,
            sunk: Cell::new(false),
        }));
        Ok(id)
    }

    /// Guess the cell at `coord`, returning `true` on a hit.
    pub fn guess_location(&mut self, coord: &Coordinate) -> Result<bool, BoardError> {
        let i = self
            .index_of(coord.x(), coord.y())
            .ok_or(ArgumentError::OutsideBoard {
                x: coord.x(),
                y: coord.y(),
            })?;
        self.grid[i].guess_coordinate()
    }

    /// Number of ships on the board.
    pub fn num_ships(&self) -> usize {
        self.ships.iter().flatten().count()
    }

    /// Number of ships whose every cell has been guessed.
    pub fn num_ships_sunk(&self) -> usize {
        self.ships
            .iter()
            .flatten()
            .filter(|s| s.is_sunk(&self.grid))
            .count()
    }

    /// Returns `true` when all ships are sunk (trivially so with no ships).
    pub fn all_ships_sunk(&self) -> bool {
        self.num_ships_sunk() == self.num_ships()
    }

    /// Snapshot of the cell at `(x, y)`. Changing it does not affect the board.
    pub fn coordinate(&self, x: i32, y: i32) -> Result<Coordinate, BoardError> {
        let i = self.index_of(x, y).ok_or(PlacementError::OutsideBoard)?;
        Ok(self.grid[i])
    }

    /// Return the cell at `(x, y)` to its unguessed, unoccupied state,
    /// releasing it from whichever ship claimed it.
    pub fn reset_coordinate(&mut self, x: i32, y: i32) -> Result<(), BoardError> {
        let i = self.index_of(x, y).ok_or(PlacementError::OutsideBoard)?;
        if let Some(id) = self.grid[i].occupant() {
            let emptied = match self.ships.get_mut(id.index()).and_then(Option::as_mut) {
                Some(placed) => {
                    placed.cells.retain(|&cell| cell != i);
                    placed.cells.is_empty()
                }
                None => false,
            };
            if emptied {
                debug!("ship #{} lost its last cell and left the board", id.index());
                self.ships[id.index()] = None;
            }
        }
        self.grid[i] = Coordinate::new(x, y);
        Ok(())
    }

    /// Snapshot of the ship with `id`, if it is still on the board.
    pub fn ship(&self, id: ShipId) -> Option<Ship> {
        self.ships
            .get(id.index())
            .and_then(Option::as_ref)
            .map(|placed| self.snapshot(placed))
    }

    /// Snapshots of every ship on the board, in placement order.
    pub fn ships(&self) -> Vec<Ship> {
        self.ships
            .iter()
            .flatten()
            .map(|placed| self.snapshot(placed))
            .collect()
    }

    fn snapshot(&self, placed: &PlacedShip) -> Ship {
        let coords = placed.cells.iter().map(|&i| self.grid[i]).collect();
        Ship::from_parts(placed.name.as_str(), coords).with_sunk(placed.is_sunk(&self.grid))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guessed = self.grid.iter().filter(|c| c.is_guessed()).count();
        write!(
            f,
            "Board {{ size: {}x{}, ships: {}, sunk: {}, guessed: {} }}",
            self.width,
            self.height,
            self.num_ships(),
            self.num_ships_sunk(),
            guessed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_ships_without_cells() {
        let mut board = Board::new();
        let ghost = Ship::from_parts("ghost", Vec::new());
        assert_eq!(
            board.set_ship(&ghost),
            Err(BoardError::InvalidArgument(ArgumentError::EmptyShip))
        );
        assert_eq!(board.num_ships(), 0);
    }

    #[test]
    fn refuses_ships_over_size_limit() {
        let mut board = Board::with_dimensions(1, 20).unwrap();
        let cells = (0..SIZE_LIMIT as i32 + 1).map(|y| Coordinate::new(0, y)).collect();
        let long = Ship::from_parts("long", cells);
        assert_eq!(
            board.set_ship(&long),
            Err(BoardError::InvalidArgument(ArgumentError::TooLong {
                span: SIZE_LIMIT + 1
            }))
        );
        assert!(board.cells().iter().all(|c| !c.is_occupied()));
    }
}
