//! Connect four on an R×C grid (default 6×7).
//!
//! - Players alternately drop a disc into a non-full column
//! - The disc falls to the lowest empty row
//! - Four in a row horizontally, vertically or diagonally wins
//! - A full grid without a line is a draw

mod board;
mod game;

pub use board::{Board, Disc};
pub use game::ConnectFour;
