//! Tic-tac-toe engine - rules model and computer opponent
//!
//! A small synchronous API for a front-end to call after each user action.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, turn bookkeeping, win and draw detection
//! - **Search**: random, heuristic and minimax move choice
//! - **Session**: a board plus explicit mode and difficulty settings
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Difficulty, Player, choose_move};
//!
//! let mut board = Board::new(Player::X);
//! board.play(4);
//! if let Some(reply) = choose_move(&board, Difficulty::Hard) {
//!     board.play(reply);
//! }
//! assert_eq!(board.turns_played(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
pub mod invariants;
mod position;
pub mod rules;
mod search;
mod session;
mod types;

// Crate-level exports - Board model
pub use board::{Board, InvalidBoard, MoveError};
pub use position::Position;
pub use types::{CELL_COUNT, Cell, Outcome, Player};

// Crate-level exports - Move search
pub use search::{
    Difficulty, MoveScore, choose_move, choose_move_with_rng, evaluate, heuristic_score,
    minimax_value,
};

// Crate-level exports - Sessions
pub use session::{GameMode, Session, SessionConfig, Status};
