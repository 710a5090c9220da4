//! One-ply heuristic scoring.

use crate::board::Board;
use crate::rules::{Line, lines_through};
use crate::types::{CELL_COUNT, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

/// Completing a line. Outweighs any sum of the other contributions.
const WIN: i32 = 100;
/// Filling the last gap in an opponent's line.
const BLOCK: i32 = 10;
/// Making two in a line with the third still open.
const BUILD: i32 = 1;

/// Approximates how much playing at `index` helps the current player.
///
/// Each line through `index` is scored by counting marks as if the current
/// player had already played there, then the line scores are summed.
///
/// # Panics
///
/// Panics if the game has ended or the cell is occupied.
pub fn heuristic_score(board: &Board, index: usize) -> i32 {
    assert!(
        !board.has_ended() && board.is_empty(index),
        "cannot score {index}: not a legal move"
    );
    let occupants = board.occupants();
    let mover = board.current_player();
    lines_through(index)
        .map(|line| line_score(&occupants, line, mover))
        .sum()
}

fn line_score(occupants: &[Option<Player>; CELL_COUNT], line: Line, mover: Player) -> i32 {
    // The hypothetical mark counts as the mover's first.
    let (mut own, mut theirs) = (1, 0);
    for index in line {
        match occupants[index] {
            Some(player) if player == mover => own += 1,
            Some(_) => theirs += 1,
            None => {}
        }
    }

    match (own, theirs) {
        (3, 0) => WIN,
        (1, 2) => BLOCK,
        (2, 0) => BUILD,
        // (2, 1), (1, 1) and (1, 0) neither win nor defend.
        _ => 0,
    }
}

/// Picks the highest-scoring candidate, uniformly among equal best.
pub(super) fn best_move<R: Rng + ?Sized>(
    board: &Board,
    mut candidates: Vec<usize>,
    rng: &mut R,
) -> Option<usize> {
    candidates.shuffle(rng);

    let mut best: Option<(usize, i32)> = None;
    for index in candidates {
        let score = heuristic_score(board, index);
        trace!(index, score, "Heuristic score");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}
