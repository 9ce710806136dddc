//! Tic-tac-toe on a 3x3 grid.
//!
//! - Players alternately mark an empty cell with X or O
//! - Three marks in a row, column or diagonal win
//! - A full board without a line is a draw
//!
//! By default X is the maximizing role.

mod board;
mod game;

pub use board::{Board, Cell, Mark};
pub use game::TicTacToe;
