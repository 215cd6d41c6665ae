#![cfg(feature = "std")]

//! Plain-text rendering of boards and events for terminal front ends.

use std::fmt::Write;

use crate::{board::Board, coordinate::Coordinate, event::GameEvent};

fn cell_char(cell: &Coordinate, reveal: bool) -> char {
    match (cell.is_guessed(), cell.is_occupied()) {
        (true, true) => 'X',
        (true, false) => 'o',
        (false, true) if reveal => 'S',
        _ => '.',
    }
}

/// Draw `board` with x across and y down. Ships are only shown when
/// `reveal` is set; hits (`X`) and misses (`o`) are always shown.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("   ");
    for x in 0..board.width() {
        let _ = write!(out, " {}", x % 10);
    }
    out.push('\n');
    for (y, row) in board.cells().chunks(board.width().max(1)).enumerate() {
        let _ = write!(out, "{:2} ", y);
        for cell in row {
            let _ = write!(out, " {}", cell_char(cell, reveal));
        }
        out.push('\n');
    }
    out
}

/// One line describing an event, e.g. `#3 Player 1 -> (4,2) HIT (sunk)`.
pub fn render_event(event: &GameEvent) -> String {
    event.to_string()
}

/// Parse `"x y"` or `"x,y"` into a coordinate.
pub fn parse_coordinate(input: &str) -> Option<Coordinate> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coordinate::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::Ship;

    #[test]
    fn renders_hits_misses_and_hidden_ships() {
        let mut board = Board::with_dimensions(3, 2).unwrap();
        let ship = Ship::new("pt", Coordinate::new(0, 0), Coordinate::new(1, 0)).unwrap();
        board.set_ship(&ship).unwrap();
        board.guess_location(&Coordinate::new(0, 0)).unwrap();
        board.guess_location(&Coordinate::new(2, 1)).unwrap();

        let hidden = render_board(&board, false);
        assert_eq!(hidden, "    0 1 2\n 0  X . .\n 1  . . o\n");
        let shown = render_board(&board, true);
        assert_eq!(shown, "    0 1 2\n 0  X S .\n 1  . . o\n");
    }

    #[test]
    fn parses_coordinates() {
        assert_eq!(parse_coordinate("3 4"), Some(Coordinate::new(3, 4)));
        assert_eq!(parse_coordinate(" 3,4 "), Some(Coordinate::new(3, 4)));
        assert_eq!(parse_coordinate("-1, 9"), Some(Coordinate::new(-1, 9)));
        assert_eq!(parse_coordinate("3"), None);
        assert_eq!(parse_coordinate("a b"), None);
        assert_eq!(parse_coordinate("1 2 3"), None);
    }
}
