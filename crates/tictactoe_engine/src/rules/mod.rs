//! Game rules for tic-tac-toe.
//!
//! Pure functions over cell occupants. They are shared by the board, which
//! applies real moves, and by the search, which applies hypothetical ones.

pub mod lines;
pub mod win;

pub use lines::{LINES, Line, lines_through};
pub use win::{completes_line, line_winner, winner};
