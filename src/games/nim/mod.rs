//! Nim under the normal play convention.
//!
//! - Players alternately remove one or more objects from a single heap
//! - The player who removes the last object wins
//! - A position with nim-sum zero is lost for the player to move

mod game;

pub use game::{Nim, NimState, Take, NIM_HEURISTIC};
