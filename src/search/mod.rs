//! Adversarial search for rust-minimax.
//!
//! ## Overview
//!
//! Four traversal strategies over any [`GameAdapter`](crate::game::GameAdapter):
//!
//! - **Minimax-Complete**: search to terminal states
//! - **Minimax-Limited**: stop after `d` plies and use the heuristic
//! - **AlphaBeta-Complete** / **AlphaBeta-Limited**: the same, with pruning
//!
//! Both strategies share one tie-break policy (first move in adapter order
//! wins on equal values), so pruning never changes the chosen move or value.
//! Every call returns its own [`SearchStats`]; nothing is kept between calls.
//!
//! ## Usage
//!
//! ```rust
//! use rust_minimax::core::{Player, Score};
//! use rust_minimax::games::tictactoe::TicTacToe;
//! use rust_minimax::search::{MoveSelector, SearchConfig};
//!
//! let selector = MoveSelector::new(TicTacToe::new(), SearchConfig::alpha_beta_complete());
//! let board = TicTacToe::empty_board();
//!
//! let decision = selector.select(&board, Player::Maximizing).unwrap();
//! assert_eq!(decision.value, Score::DRAW);
//! println!("play {:?} ({} nodes)", decision.best_move, decision.stats.nodes_visited);
//! ```
//!
//! The free functions ([`minimax`], [`alpha_beta`] and their
//! `_complete`/`_limited` forms) expose the raw traversal, which also accepts
//! a depth of zero and then scores the root without applying any move.

pub mod alpha_beta;
pub mod config;
mod context;
pub mod minimax;
pub mod outcome;
pub mod selector;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types
pub use alpha_beta::{alpha_beta, alpha_beta_complete, alpha_beta_limited};
pub use config::{SearchConfig, Strategy};
pub use minimax::{minimax, minimax_complete, minimax_limited};
pub use outcome::{Decision, SearchOutcome};
pub use selector::{select_move, MoveSelector};
pub use stats::SearchStats;
