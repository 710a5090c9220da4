//! First-class invariants for the board.
//!
//! Invariants are logical properties that must hold after every move.
//! [`Board::play`] checks them in debug builds, and they can be tested
//! independently.

use crate::board::Board;
use crate::rules::{LINES, line_winner};
use crate::types::{CELL_COUNT, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the turn counter equals the number of occupied cells.
pub struct TurnCountInvariant;

impl Invariant<Board> for TurnCountInvariant {
    fn holds(board: &Board) -> bool {
        let occupied = board.cells().iter().filter(|cell| !cell.is_empty()).count();
        occupied == usize::from(board.turns_played())
    }

    fn description() -> &'static str {
        "Turn count matches occupied cells"
    }
}

/// Invariant: matching cells are exactly the winner's completed lines.
///
/// Without a winner no cell is marked and no line is complete.
pub struct MatchingLinesInvariant;

impl Invariant<Board> for MatchingLinesInvariant {
    fn holds(board: &Board) -> bool {
        let occupants = board.occupants();
        let mut expected = [false; CELL_COUNT];
        for line in LINES {
            match line_winner(&occupants, line) {
                Some(player) if Some(player) == board.winner() => {
                    for index in line {
                        expected[index] = true;
                    }
                }
                Some(_) => return false,
                None => {}
            }
        }

        let marked = board.cells().map(|cell| cell.is_matching());
        let has_line = expected.contains(&true);
        marked == expected && has_line == board.winner().is_some()
    }

    fn description() -> &'static str {
        "Matching cells are exactly the winner's completed lines"
    }
}

/// Invariant: players alternate.
///
/// While the game runs, the player to move has made no more moves than the
/// opponent. Once it ends, `current_player` is the last mover, who has made
/// at least as many moves as the opponent.
pub struct AlternatingTurnInvariant;

impl Invariant<Board> for AlternatingTurnInvariant {
    fn holds(board: &Board) -> bool {
        let count = |player: Player| {
            board
                .cells()
                .iter()
                .filter(|cell| cell.occupant() == Some(player))
                .count()
        };
        let mover = count(board.current_player());
        let other = count(board.current_player().opponent());

        if board.has_ended() {
            mover == other || mover == other + 1
        } else {
            mover == other || mover + 1 == other
        }
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (
    TurnCountInvariant,
    MatchingLinesInvariant,
    AlternatingTurnInvariant,
);
