//! The 3x3 board and its move rules.

use crate::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use crate::rules::{line_winner, lines_through};
use crate::types::{CELL_COUNT, Cell, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error returned by [`Board::try_play`] for a move that breaks the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a cell.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
}

impl std::error::Error for MoveError {}

/// Error returned when a deserialized board breaks a board invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBoard {
    /// Every invariant the board violates.
    pub violations: Vec<InvariantViolation>,
}

impl std::fmt::Display for InvalidBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid board:")?;
        for violation in &self.violations {
            write!(f, " {};", violation.description)?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidBoard {}

/// Tic-tac-toe board with turn and winner bookkeeping.
///
/// A board is mutated in place by [`Board::play`] and replaced wholesale
/// when a new game starts. Deserializing checks the board invariants, so a
/// board read from untrusted data is rejected rather than trusted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
    /// Player whose turn it is, or who moved last once the game ended.
    current_player: Player,
    /// Moves made so far.
    turns_played: u8,
    /// Set once a line is completed; never cleared.
    winner: Option<Player>,
}

/// Board fields as they appear on the wire, before validation.
#[derive(Debug, Deserialize)]
pub(crate) struct RawBoard {
    cells: [Cell; CELL_COUNT],
    current_player: Player,
    turns_played: u8,
    winner: Option<Player>,
}

impl RawBoard {
    /// Builds the board without checking it.
    pub(crate) fn into_board_unchecked(self) -> Board {
        Board {
            cells: self.cells,
            current_player: self.current_player,
            turns_played: self.turns_played,
            winner: self.winner,
        }
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = InvalidBoard;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let board = raw.into_board_unchecked();
        BoardInvariants::check_all(&board).map_err(|violations| InvalidBoard { violations })?;
        Ok(board)
    }
}

impl Board {
    /// Creates an empty board with `starting_player` to move.
    #[instrument]
    pub fn new(starting_player: Player) -> Self {
        Self {
            cells: [Cell::default(); CELL_COUNT],
            current_player: starting_player,
            turns_played: 0,
            winner: None,
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// The cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// The player to move, or the last mover once the game has ended.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of moves made.
    pub fn turns_played(&self) -> u8 {
        self.turns_played
    }

    /// The winner, once a line has been completed.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// True iff someone has won or every cell is filled.
    pub fn has_ended(&self) -> bool {
        self.winner.is_some() || usize::from(self.turns_played) == CELL_COUNT
    }

    /// The result of the game, once it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner {
            Some(player) => Some(Outcome::Winner(player)),
            None if self.has_ended() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Checks if the cell at `index` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    pub fn is_empty(&self, index: usize) -> bool {
        assert!(index < CELL_COUNT, "cell index {index} out of bounds");
        self.cells[index].is_empty()
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_empty()).collect()
    }

    /// Occupants in row-major order, without match markers.
    pub fn occupants(&self) -> [Option<Player>; CELL_COUNT] {
        self.cells.map(|cell| cell.occupant)
    }

    /// Plays the current player at `index`.
    ///
    /// Marks every line completed by the move, then passes the turn to the
    /// opponent unless the game ended.
    ///
    /// # Panics
    ///
    /// Panics if the game has ended, `index >= 9`, or the cell is occupied.
    /// Callers must only offer legal moves; use [`Board::try_play`] for
    /// unchecked input.
    #[instrument(skip(self), fields(player = %self.current_player, turn = self.turns_played))]
    pub fn play(&mut self, index: usize) {
        assert!(index < CELL_COUNT, "cell index {index} out of bounds");
        assert!(!self.has_ended(), "cannot play at {index}: the game has ended");
        assert!(self.is_empty(index), "cannot play at {index}: cell is occupied");
        self.place(index);
    }

    /// Plays the current player at `index` after validating the move.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves the board untouched if the move is
    /// illegal.
    #[instrument(skip(self), fields(player = %self.current_player, turn = self.turns_played))]
    pub fn try_play(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfBounds(index));
        }
        if self.has_ended() {
            return Err(MoveError::GameOver);
        }
        if !self.cells[index].is_empty() {
            return Err(MoveError::CellOccupied(index));
        }
        self.place(index);
        Ok(())
    }

    fn place(&mut self, index: usize) {
        let mover = self.current_player;
        self.cells[index].occupant = Some(mover);

        // Only lines through the new mark can have been completed.
        let occupants = self.occupants();
        for line in lines_through(index) {
            if line_winner(&occupants, line) == Some(mover) {
                self.winner = Some(mover);
                for cell in line {
                    self.cells[cell].is_matching = true;
                }
            }
        }

        self.turns_played += 1;
        if !self.has_ended() {
            self.current_player = mover.opponent();
        }

        debug!(index, ?mover, outcome = ?self.outcome(), "Move played");
        debug_assert!(
            BoardInvariants::check_all(self).is_ok(),
            "board invariants violated after playing {index}"
        );
    }
}

impl std::fmt::Display for Board {
    /// Renders three rows; empty cells show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for column in 0..3 {
                let index = row * 3 + column;
                match self.cells[index].occupant {
                    Some(player) => write!(f, "{}", player)?,
                    None => write!(f, "{}", index + 1)?,
                }
                if column < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
