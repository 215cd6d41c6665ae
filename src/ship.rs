//! Ship definitions: a named, straight run of coordinates.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::common::{ArgumentError, BoardError};
use crate::config::SIZE_LIMIT;
use crate::coordinate::Coordinate;

/// A ship occupying an ordered, straight line of coordinates.
///
/// Ships built by callers are placement proposals; a board copies the
/// positions into its own cells when the ship is placed, so later changes
/// to the proposal do not reach the board.
#[derive(Clone)]
pub struct Ship {
    name: String,
    coordinates: Vec<Coordinate>,
    sunk: Cell<bool>,
}

impl Ship {
    /// Build a ship running from `start` to `end` inclusive.
    ///
    /// The run is walked one cell at a time from `start`, resolving the
    /// x distance before the y distance.
    pub fn new(
        name: impl Into<String>,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Self, BoardError> {
        if !is_linear(&start, &end) {
            return Err(ArgumentError::NotLinear.into());
        }

        let mut dx = i64::from(end.x()) - i64::from(start.x());
        let mut dy = i64::from(end.y()) - i64::from(start.y());
        let span = dx.unsigned_abs().max(dy.unsigned_abs()) + 1;
        if span > SIZE_LIMIT as u64 {
            return Err(ArgumentError::TooLong {
                span: usize::try_from(span).unwrap_or(usize::MAX),
            }
            .into());
        }

        let (x0, y0) = (i64::from(start.x()), i64::from(start.y()));
        let mut coordinates = Vec::with_capacity(span as usize);
        coordinates.push(start.stripped());
        let mut step: i64 = 1;
        while dx != 0 || dy != 0 {
            let (x, y) = if dx > 0 {
                dx -= 1;
                (x0 + step, y0)
            } else if dx < 0 {
                dx += 1;
                (x0 - step, y0)
            } else if dy > 0 {
                dy -= 1;
                (x0, y0 + step)
            } else {
                dy += 1;
                (x0, y0 - step)
            };
            // every cell lies between start and end, so it fits in i32
            coordinates.push(Coordinate::new(x as i32, y as i32));
            step += 1;
        }

        Ok(Self::from_parts(name, coordinates))
    }

    /// Build a ship from an explicit ordered list of coordinates.
    ///
    /// Consecutive entries must share an axis and step one cell at a time
    /// in a single direction.
    pub fn from_coordinates(
        name: impl Into<String>,
        coords: &[Coordinate],
    ) -> Result<Self, BoardError> {
        if coords.is_empty() {
            return Err(ArgumentError::EmptyShip.into());
        }
        if coords.len() > SIZE_LIMIT {
            return Err(ArgumentError::TooLong { span: coords.len() }.into());
        }

        let mut direction = None;
        for pair in coords.windows(2) {
            if !is_linear(&pair[0], &pair[1]) {
                return Err(ArgumentError::NotLinear.into());
            }
            let step = (
                i64::from(pair[1].x()) - i64::from(pair[0].x()),
                i64::from(pair[1].y()) - i64::from(pair[0].y()),
            );
            if step.0.abs() + step.1.abs() != 1 {
                return Err(ArgumentError::NotContiguous.into());
            }
            match direction {
                None => direction = Some(step),
                Some(d) if d != step => return Err(ArgumentError::NotContiguous.into()),
                Some(_) => {}
            }
        }

        Ok(Self::from_parts(
            name,
            coords.iter().map(Coordinate::stripped).collect(),
        ))
    }

    /// Assemble a ship from coordinates already known to form a valid run.
    pub(crate) fn from_parts(name: impl Into<String>, coordinates: Vec<Coordinate>) -> Self {
        Self {
            name: name.into(),
            coordinates,
            sunk: Cell::new(false),
        }
    }

    pub(crate) fn with_sunk(self, sunk: bool) -> Self {
        self.sunk.set(sunk);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cells the ship occupies.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Borrow the ship's own coordinates.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Mutable access to the same coordinates the sunk check observes.
    /// Guessing through this slice counts towards sinking the ship.
    pub fn coordinates_mut(&mut self) -> &mut [Coordinate] {
        &mut self.coordinates
    }

    /// Fresh copy of the coordinates, detached from the ship.
    pub fn to_coordinates(&self) -> Vec<Coordinate> {
        self.coordinates.clone()
    }

    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.coordinates.contains(coord)
    }

    /// `true` once every coordinate has been guessed. Once reported the
    /// result is latched and never reverts.
    pub fn is_sunk(&self) -> bool {
        if !self.sunk.get() {
            if !self.coordinates.iter().all(Coordinate::is_guessed) {
                return false;
            }
            self.sunk.set(true);
        }
        true
    }
}

/// Two points share a vertical or horizontal line.
fn is_linear(a: &Coordinate, b: &Coordinate) -> bool {
    a.x() == b.x() || a.y() == b.y()
}

impl PartialEq for Ship {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.coordinates == other.coordinates
    }
}

impl Eq for Ship {}

impl Hash for Ship {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.coordinates.hash(state);
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.coordinates.iter().map(|c| c.to_string()).collect();
        write!(
            f,
            "Ship {{ name: {:?}, cells: [{}], sunk: {} }}",
            self.name,
            cells.join(", "),
            self.sunk.get()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_west_from_start() {
        let ship = Ship::new("w", Coordinate::new(3, -12), Coordinate::new(0, -12)).unwrap();
        let xs: Vec<i32> = ship.coordinates().iter().map(Coordinate::x).collect();
        assert_eq!(xs, [3, 2, 1, 0]);
        assert!(ship.coordinates().iter().all(|c| c.y() == -12));
    }

    #[test]
    fn walks_near_integer_limits() {
        let ship = Ship::new(
            "edge",
            Coordinate::new(i32::MAX, i32::MAX),
            Coordinate::new(i32::MAX - SIZE_LIMIT as i32 + 1, i32::MAX),
        )
        .unwrap();
        assert_eq!(ship.len(), SIZE_LIMIT);
        assert_eq!(ship.coordinates()[SIZE_LIMIT - 1].x(), i32::MAX - 9);

        let err = Ship::new("huge", Coordinate::new(i32::MAX, 7), Coordinate::new(10, 7));
        assert!(matches!(
            err,
            Err(BoardError::InvalidArgument(ArgumentError::TooLong { .. }))
        ));
    }

    #[test]
    fn sunk_latch_survives_reset_cells() {
        let mut ship = Ship::new("latch", Coordinate::new(0, 0), Coordinate::new(0, 1)).unwrap();
        for c in ship.coordinates_mut() {
            c.guess_coordinate().unwrap();
        }
        assert!(ship.is_sunk());
        ship.coordinates_mut()[0] = Coordinate::new(0, 0);
        assert!(ship.is_sunk());
    }
}
