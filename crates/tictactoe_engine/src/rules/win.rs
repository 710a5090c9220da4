//! Win detection over an occupant grid.

use super::lines::{LINES, Line, lines_through};
use crate::types::{CELL_COUNT, Player};

/// Returns the player owning all three cells of `line`, if any.
pub fn line_winner(occupants: &[Option<Player>; CELL_COUNT], line: Line) -> Option<Player> {
    let [a, b, c] = line;
    match occupants[a] {
        Some(player) if occupants[b] == Some(player) && occupants[c] == Some(player) => {
            Some(player)
        }
        _ => None,
    }
}

/// True iff some line through `index` is complete.
pub fn completes_line(occupants: &[Option<Player>; CELL_COUNT], index: usize) -> bool {
    lines_through(index).any(|line| line_winner(occupants, line).is_some())
}

/// Scans the whole grid for a completed line.
pub fn winner(occupants: &[Option<Player>; CELL_COUNT]) -> Option<Player> {
    LINES.iter().find_map(|&line| line_winner(occupants, line))
}
