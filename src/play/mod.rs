//! Playing whole games.
//!
//! Agents pick moves; the driver alternates them, checks every move through
//! the adapter, and records the result.
//!
//! ```
//! use rust_minimax::core::Player;
//! use rust_minimax::games::TicTacToe;
//! use rust_minimax::play::{play_match, SearchAgent};
//! use rust_minimax::search::SearchConfig;
//!
//! let game = TicTacToe::new();
//! let mut x = SearchAgent::new(SearchConfig::alpha_beta_complete());
//! let mut o = SearchAgent::new(SearchConfig::alpha_beta_complete());
//!
//! let record = play_match(
//!     &game,
//!     &TicTacToe::empty_board(),
//!     Player::Maximizing,
//!     &mut x,
//!     &mut o,
//!     9,
//! )
//! .unwrap();
//! assert!(record.is_finished());
//! assert_eq!(record.winner(), None);
//! ```

mod agent;
mod config;
mod driver;

pub use agent::{Agent, RandomAgent, SearchAgent};
pub use config::{AgentKind, ConfiguredAgent, FirstMover, MatchConfig};
pub use driver::{play_match, run_match, MatchRecord, Ply};
