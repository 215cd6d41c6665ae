//! Random placement of roster ships, standing in for a placement UI.

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, PlacementError, Player};
use crate::config::{ShipType, SHIPS};
use crate::coordinate::Coordinate;
use crate::game::Game;
use crate::ship::Ship;

const MAX_ATTEMPTS: usize = 100;

/// Returns a random in-bounds ship for `def` that does not overlap any ship
/// or guessed cell already on `board`.
pub fn random_placement<R: Rng>(
    board: &Board,
    rng: &mut R,
    def: ShipType,
) -> Result<Ship, BoardError> {
    let len = def.length();
    if len == 0
        || board.width() == 0
        || board.height() == 0
        || (len > board.width() && len > board.height())
    {
        return Err(PlacementError::OutsideBoard.into());
    }
    for _ in 0..MAX_ATTEMPTS {
        let horizontal = if len > board.width() {
            false
        } else if len > board.height() {
            true
        } else {
            rng.random()
        };
        let (max_x, max_y) = if horizontal {
            (board.width() - len, board.height() - 1)
        } else {
            (board.width() - 1, board.height() - len)
        };
        let x = rng.random_range(0..=max_x) as i32;
        let y = rng.random_range(0..=max_y) as i32;
        let end = if horizontal {
            Coordinate::new(x + len as i32 - 1, y)
        } else {
            Coordinate::new(x, y + len as i32 - 1)
        };
        let ship = Ship::new(def.name(), Coordinate::new(x, y), end)?;
        let free = ship.coordinates().iter().all(|c| {
            board
                .coordinate(c.x(), c.y())
                .map(|cell| !cell.is_occupied() && !cell.is_guessed())
                .unwrap_or(false)
        });
        if free {
            return Ok(ship);
        }
    }
    Err(PlacementError::Occupied.into())
}

/// Place every ship of the standard roster on `board` at random.
pub fn place_random_fleet<R: Rng>(board: &mut Board, rng: &mut R) -> Result<(), BoardError> {
    for def in SHIPS {
        let ship = random_placement(board, rng, def)?;
        board.set_ship(&ship)?;
    }
    Ok(())
}

/// Place the standard roster for `player` through the game's rules.
/// Fails once the game has started.
pub fn place_standard_fleet<R: Rng>(
    game: &mut Game,
    player: Player,
    rng: &mut R,
) -> Result<(), BoardError> {
    for def in SHIPS {
        let ship = random_placement(game.board(player), rng, def)?;
        if !game.set_ship(player, &ship) {
            return Err(PlacementError::Occupied.into());
        }
    }
    Ok(())
}
