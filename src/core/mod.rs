//! Core types shared by the search engine and the game adapters.
//!
//! Nothing in here knows about any particular game.

pub mod error;
pub mod player;
pub mod rng;
pub mod score;

pub use error::{SearchError, SearchResult};
pub use player::Player;
pub use rng::GameRng;
pub use score::Score;
