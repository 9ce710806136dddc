//! Error taxonomy for search and game adapters.
//!
//! Every failure is a precondition violation detected at a boundary. Nothing
//! here is retried, and the engine never swallows an adapter error.

use thiserror::Error;

/// Errors surfaced by adapters, the search engine and the move selector.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A move that is not legal in the given state was applied.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    /// A move was requested from a terminal or move-less state.
    #[error("no legal moves from the root state")]
    NoLegalMoves,

    /// A board or state description could not be parsed.
    #[error("invalid board: {0}")]
    Parse(String),

    /// The search configuration is nonsensical.
    #[error("invalid search configuration: {0}")]
    Config(String),
}

impl SearchError {
    /// Build an `InvalidMove` from anything displayable.
    pub fn invalid_move(reason: impl std::fmt::Display) -> Self {
        SearchError::InvalidMove(reason.to_string())
    }
}

/// Result alias used throughout the crate.
pub type SearchResult<T> = Result<T, SearchError>;
