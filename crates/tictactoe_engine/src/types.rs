//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X.
    #[serde(alias = "x")]
    X,
    /// Player O.
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) occupant: Option<Player>,
    pub(crate) is_matching: bool,
}

impl Cell {
    /// The player who played here, if anyone.
    pub fn occupant(&self) -> Option<Player> {
        self.occupant
    }

    /// True iff this cell belongs to a completed winning line.
    pub fn is_matching(&self) -> bool {
        self.is_matching
    }

    /// True iff no one has played here.
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent().opponent(), Player::X);
    }

    #[test]
    fn test_player_parses_either_case() {
        assert_eq!(Player::from_str("x"), Ok(Player::X));
        assert_eq!(Player::from_str("O"), Ok(Player::O));
        assert!(Player::from_str("z").is_err());
    }

    #[test]
    fn test_default_cell_is_empty() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert!(!cell.is_matching());
        assert_eq!(cell.occupant(), None);
    }

    #[test]
    fn test_outcome_accessors() {
        assert_eq!(Outcome::Winner(Player::O).winner(), Some(Player::O));
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        assert_eq!(Outcome::Winner(Player::X).to_string(), "Player X wins");
    }
}
