//! Move search for the computer player.
//!
//! Three policies, selected by [`Difficulty`]:
//!
//! - **Easy**: a uniformly random empty cell.
//! - **Medium**: the best one-ply [heuristic score](heuristic_score), with
//!   ties broken uniformly at random.
//! - **Hard**: exhaustive [minimax](minimax_value) with alpha-beta pruning.
//!
//! Searching never changes the board it is given.

mod heuristic;
mod minimax;

pub use heuristic::heuristic_score;
pub use minimax::minimax_value;

use crate::board::Board;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How hard the computer tries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random moves.
    Easy,
    /// One-ply heuristic.
    Medium,
    /// Perfect play.
    #[default]
    Hard,
}

/// Score assigned to a candidate move by a difficulty's evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveScore {
    /// Cell index of the candidate.
    pub index: usize,
    /// Higher is better for the player to move.
    pub score: i32,
}

/// Chooses a move for the current player using the thread-local RNG.
///
/// Returns `None` iff the game has ended.
pub fn choose_move(board: &Board, difficulty: Difficulty) -> Option<usize> {
    choose_move_with_rng(board, difficulty, &mut rand::rng())
}

/// Chooses a move for the current player, drawing randomness from `rng`.
///
/// Returns `None` iff the game has ended; otherwise an empty cell index.
#[instrument(
    skip(board, rng),
    fields(player = %board.current_player(), turn = board.turns_played())
)]
pub fn choose_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    if board.has_ended() {
        debug!("Game has ended, no move to choose");
        return None;
    }

    let candidates = board.empty_indices();
    let choice = match difficulty {
        Difficulty::Easy => candidates.choose(rng).copied(),
        Difficulty::Medium => heuristic::best_move(board, candidates, rng),
        Difficulty::Hard => minimax::best_move(board, &candidates),
    };

    debug!(?choice, "Move chosen");
    choice
}

/// Scores every empty cell the way `difficulty` sees it.
///
/// Easy rates every candidate equally. Returns an empty list once the game
/// has ended.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, difficulty: Difficulty) -> Vec<MoveScore> {
    if board.has_ended() {
        return Vec::new();
    }

    board
        .empty_indices()
        .into_iter()
        .map(|index| {
            let score = match difficulty {
                Difficulty::Easy => 0,
                Difficulty::Medium => heuristic_score(board, index),
                Difficulty::Hard => minimax_value(board, index),
            };
            MoveScore::new(index, score)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_string_forms() {
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert_eq!(Difficulty::from_str("HARD"), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::default(), Difficulty::Hard);
    }

    #[test]
    fn test_no_move_on_ended_board() {
        let mut board = Board::new(Player::X);
        for index in [0, 3, 1, 4, 2] {
            board.play(index);
        }
        let mut rng = StdRng::seed_from_u64(7);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(choose_move_with_rng(&board, difficulty, &mut rng), None);
        }
        assert!(evaluate(&board, Difficulty::Hard).is_empty());
    }

    #[test]
    fn test_last_cell_is_the_only_choice() {
        let mut board = Board::new(Player::X);
        // X O X / X O O / O X .
        for index in [0, 1, 2, 4, 3, 5, 7, 6] {
            board.play(index);
        }
        assert!(!board.has_ended());
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(choose_move(&board, difficulty), Some(8));
        }
    }

    #[test]
    fn test_evaluate_covers_every_empty_cell() {
        let mut board = Board::new(Player::X);
        board.play(4);
        let scores = evaluate(&board, Difficulty::Medium);
        let indices: Vec<_> = scores.iter().map(|s| s.index).collect();
        assert_eq!(indices, board.empty_indices());
        assert!(evaluate(&board, Difficulty::Easy).iter().all(|s| s.score == 0));
    }
}
