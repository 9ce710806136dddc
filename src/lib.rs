//! # rust-minimax
//!
//! A game-agnostic adversarial search engine for two-player, zero-sum,
//! perfect-information games.
//!
//! ## Design Principles
//!
//! 1. **One Engine**: Minimax and Alpha-Beta are written once, generic over
//!    a [`GameAdapter`]. Games only describe their rules.
//!
//! 2. **Values Belong to MAX**: Every score is the maximizing role's utility.
//!    The minimizing role flips the comparison, never the sign.
//!
//! 3. **First Found Wins**: A later move must be strictly better to replace
//!    the current best, so pruning never changes the chosen move.
//!
//! 4. **No Globals**: Each search returns its own [`SearchStats`].
//!
//! ## Modules
//!
//! - `core`: Players, scores, errors, RNG
//! - `game`: The adapter contract and pluggable heuristics
//! - `search`: Minimax, Alpha-Beta and the move selector
//! - `games`: Tic-tac-toe, connect four and nim adapters
//! - `play`: Agents and a match driver

pub mod core;
pub mod game;
pub mod games;
pub mod play;
pub mod search;

// Re-export commonly used types
pub use crate::core::{GameRng, Player, Score, SearchError, SearchResult};

pub use crate::game::{GameAdapter, GameResult, WithHeuristic};

pub use crate::search::{
    alpha_beta, alpha_beta_complete, alpha_beta_limited, minimax, minimax_complete,
    minimax_limited, select_move, Decision, MoveSelector, SearchConfig, SearchOutcome,
    SearchStats, Strategy,
};

pub use crate::play::{play_match, run_match, Agent, FirstMover, MatchConfig, MatchRecord};
