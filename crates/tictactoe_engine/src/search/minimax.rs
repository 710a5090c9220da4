//! Exhaustive minimax with alpha-beta pruning.
//!
//! Values are from the root mover's point of view: `1` for a forced win,
//! `-1` for a forced loss, `0` for a draw. Depth is not discounted.

use crate::board::Board;
use crate::rules::completes_line;
use crate::types::{CELL_COUNT, Player};
use tracing::trace;

const WIN: i32 = 1;
const LOSS: i32 = -1;
const DRAW: i32 = 0;

/// Best values found so far for each side.
#[derive(Debug, Clone, Copy)]
struct Window {
    best_for_max: i32,
    best_for_min: i32,
}

impl Window {
    /// The worst possible value for each side.
    const OPEN: Window = Window {
        best_for_max: i32::MIN,
        best_for_min: i32::MAX,
    };

    fn is_closed(&self) -> bool {
        self.best_for_max >= self.best_for_min
    }
}

/// Scratch grid the search places and removes hypothetical marks on.
///
/// Every mark placed is removed before returning, and the mover is switched
/// back, so siblings see the same position.
#[derive(Debug)]
struct Search {
    occupants: [Option<Player>; CELL_COUNT],
    to_move: Player,
    nodes: u64,
    cutoffs: u64,
}

impl Search {
    fn new(board: &Board) -> Self {
        Self {
            occupants: board.occupants(),
            to_move: board.current_player(),
            nodes: 0,
            cutoffs: 0,
        }
    }

    /// Value of `to_move` playing at `index`.
    fn value_of(&mut self, index: usize, maximizing: bool, window: Window) -> i32 {
        debug_assert!(self.occupants[index].is_none());
        self.nodes += 1;
        self.occupants[index] = Some(self.to_move);
        let value = self.settle(index, maximizing, window);
        self.occupants[index] = None;
        value
    }

    fn settle(&mut self, index: usize, maximizing: bool, mut window: Window) -> i32 {
        if completes_line(&self.occupants, index) {
            return if maximizing { WIN } else { LOSS };
        }

        let (remaining, count) = self.empty_cells();
        if count == 0 {
            return DRAW;
        }

        self.to_move = self.to_move.opponent();
        let maximizing = !maximizing;
        for &next in &remaining[..count] {
            if window.is_closed() {
                self.cutoffs += 1;
                break;
            }
            let value = self.value_of(next, maximizing, window);
            if maximizing {
                window.best_for_max = window.best_for_max.max(value);
            } else {
                window.best_for_min = window.best_for_min.min(value);
            }
        }
        self.to_move = self.to_move.opponent();

        if maximizing {
            window.best_for_max
        } else {
            window.best_for_min
        }
    }

    fn empty_cells(&self) -> ([usize; CELL_COUNT], usize) {
        let mut cells = [0; CELL_COUNT];
        let mut count = 0;
        for (index, occupant) in self.occupants.iter().enumerate() {
            if occupant.is_none() {
                cells[count] = index;
                count += 1;
            }
        }
        (cells, count)
    }
}

/// Game-theoretic value of the current player playing at `index`.
///
/// # Panics
///
/// Panics if the game has ended or the cell is occupied.
pub fn minimax_value(board: &Board, index: usize) -> i32 {
    assert!(
        !board.has_ended() && board.is_empty(index),
        "cannot search {index}: not a legal move"
    );
    Search::new(board).value_of(index, true, Window::OPEN)
}

/// First candidate, in the given order, with the highest minimax value.
pub(super) fn best_move(board: &Board, candidates: &[usize]) -> Option<usize> {
    let mut search = Search::new(board);

    let mut best: Option<(usize, i32)> = None;
    for &index in candidates {
        let value = search.value_of(index, true, Window::OPEN);
        trace!(index, value, "Minimax value");
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((index, value));
        }
    }

    trace!(nodes = search.nodes, cutoffs = search.cutoffs, "Search finished");
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_after(starting: Player, moves: &[usize]) -> Board {
        let mut board = Board::new(starting);
        for &index in moves {
            board.play(index);
        }
        board
    }

    #[test]
    fn test_immediate_win_is_worth_one() {
        // X X . / O O . / . . .
        let board = board_after(Player::X, &[0, 3, 1, 4]);
        assert_eq!(minimax_value(&board, 2), WIN);
        // Anything else lets O complete the middle row.
        assert_eq!(minimax_value(&board, 8), LOSS);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let board = Board::new(Player::X);
        for index in 0..CELL_COUNT {
            assert_eq!(minimax_value(&board, index), DRAW, "index {index}");
        }
    }

    #[test]
    fn test_search_restores_scratch_grid() {
        let board = board_after(Player::O, &[4, 0]);
        let mut search = Search::new(&board);
        let before = (search.occupants, search.to_move);
        for index in board.empty_indices() {
            search.value_of(index, true, Window::OPEN);
            assert_eq!((search.occupants, search.to_move), before);
        }
        assert!(search.nodes > 0);
    }

    /// Nodes in the unpruned game tree below `to_move` playing at `index`.
    fn full_tree_nodes(
        occupants: &mut [Option<Player>; CELL_COUNT],
        to_move: Player,
        index: usize,
    ) -> u64 {
        occupants[index] = Some(to_move);
        let mut nodes = 1;
        if !completes_line(occupants, index) {
            for next in 0..CELL_COUNT {
                if occupants[next].is_none() {
                    nodes += full_tree_nodes(occupants, to_move.opponent(), next);
                }
            }
        }
        occupants[index] = None;
        nodes
    }

    #[test]
    fn test_pruning_cuts_nodes() {
        let board = Board::new(Player::X);
        let mut search = Search::new(&board);
        search.value_of(0, true, Window::OPEN);
        assert!(search.cutoffs > 0);

        let unpruned = full_tree_nodes(&mut board.occupants(), Player::X, 0);
        assert!(search.nodes < unpruned, "visited {} of {unpruned} nodes", search.nodes);
    }

    #[test]
    fn test_best_move_prefers_first_of_equals() {
        let board = Board::new(Player::X);
        let candidates = board.empty_indices();
        assert_eq!(best_move(&board, &candidates), Some(0));
    }
}
