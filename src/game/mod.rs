//! The Game Adapter contract.
//!
//! Games implement `GameAdapter` to define:
//! - Legal moves for each state, in a fixed order
//! - How a move produces a new state
//! - Terminal detection and scoring
//!
//! The search engine calls into `GameAdapter` but never interprets
//! game-specific concepts directly.

pub mod adapter;
pub mod heuristic;

pub use adapter::{GameAdapter, GameResult};
pub use heuristic::WithHeuristic;
