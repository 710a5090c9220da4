//! Position analysis: how each difficulty rates the open cells.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tictactoe_engine::{Board, Difficulty, MoveScore, Outcome, Player, Position, evaluate};
use tracing::instrument;

/// Scores for one position.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// The analyzed position.
    pub board: Board,
    /// Player to move, if the game is still running.
    pub to_move: Option<Player>,
    /// Result, if the game has ended.
    pub outcome: Option<Outcome>,
    /// Heuristic scores (medium difficulty).
    pub heuristic: Vec<MoveScore>,
    /// Minimax values (hard difficulty): 1 win, 0 draw, -1 loss.
    pub minimax: Vec<MoveScore>,
}

/// Replays comma-separated moves from an empty board.
#[instrument]
pub fn replay(moves: &str, first: Player) -> Result<Board> {
    let mut board = Board::new(first);
    for token in moves.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let Some(position) = Position::parse(token) else {
            bail!("Unrecognized move {:?}", token);
        };
        board
            .try_play(position.index())
            .with_context(|| format!("Cannot play {}", position))?;
    }
    Ok(board)
}

/// Scores every open cell of `board`.
pub fn analyze(board: Board) -> Analysis {
    let heuristic = evaluate(&board, Difficulty::Medium);
    let minimax = evaluate(&board, Difficulty::Hard);
    Analysis {
        to_move: (!board.has_ended()).then(|| board.current_player()),
        outcome: board.outcome(),
        board,
        heuristic,
        minimax,
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        if let Some(outcome) = self.outcome {
            return writeln!(f, "Game over: {}", outcome);
        }
        if let Some(player) = self.to_move {
            writeln!(f, "{} to move", player)?;
        }
        writeln!(f, "{:<14} {:>9} {:>8}", "cell", "heuristic", "minimax")?;
        for (heuristic, minimax) in self.heuristic.iter().zip(&self.minimax) {
            let label = Position::from_index(heuristic.index).map_or("?", |p| p.label());
            writeln!(
                f,
                "{:<14} {:>9} {:>8}",
                format!("{} {}", heuristic.index + 1, label),
                heuristic.score,
                minimax.score
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_uses_one_based_cells() {
        let board = replay("5, 1", Player::X).unwrap();
        assert_eq!(board.cell(4).occupant(), Some(Player::X));
        assert_eq!(board.cell(0).occupant(), Some(Player::O));
    }

    #[test]
    fn test_replay_rejects_bad_moves() {
        assert!(replay("5,5", Player::X).is_err());
        assert!(replay("5,middle", Player::X).is_err());
    }

    #[test]
    fn test_analysis_finds_the_winning_cell() {
        // X X . / O O . / . . .
        let analysis = analyze(replay("1,4,2,5", Player::X).unwrap());
        assert_eq!(analysis.to_move, Some(Player::X));
        let best = analysis.minimax.iter().max_by_key(|s| s.score).unwrap();
        assert_eq!(best.score, 1);
        assert_eq!(analysis.minimax.iter().filter(|s| s.score == 1).count(), 1);
        assert!(analysis.to_string().contains("3 Top-right"));
    }

    #[test]
    fn test_finished_game_has_no_scores() {
        let analysis = analyze(replay("1,4,2,5,3", Player::X).unwrap());
        assert_eq!(analysis.outcome, Some(Outcome::Winner(Player::X)));
        assert!(analysis.heuristic.is_empty());
        assert!(analysis.to_string().contains("Game over: Player X wins"));
    }
}
