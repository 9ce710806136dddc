//! Game adapter trait for game implementations.
//!
//! Games implement `GameAdapter` to define their rules:
//! - What moves are legal, and in which order
//! - How moves produce new states
//! - Win/loss/draw conditions and heuristic estimates

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::core::{Player, Score, SearchResult};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Canonical score of this result from `perspective`'s point of view.
    #[must_use]
    pub fn value_for(&self, perspective: Player) -> Score {
        match self {
            GameResult::Winner(winner) => Score::win_for(*winner, perspective),
            GameResult::Draw => Score::DRAW,
        }
    }
}

/// Game adapter trait.
///
/// The engine calls these methods while searching. States are values: `apply`
/// returns a fresh state and never mutates its input, so sibling branches of
/// the search tree can never alias each other.
///
/// ## Implementation Notes
///
/// - `enumerate_moves`: Deterministic order; it defines tie-break priority.
///   Return an empty vec once the game is over.
/// - `apply`: Fail with `SearchError::InvalidMove` for anything not returned
///   by `enumerate_moves`. Never "fix up" a bad move.
/// - `outcome`: Return `None` while the game continues.
/// - `heuristic_value`: Must stay strictly inside `(Score::LOSS, Score::WIN)`.
pub trait GameAdapter {
    /// One game position.
    type State: Clone + Debug;

    /// A transition between positions.
    type Move: Clone + Debug + PartialEq;

    /// Legal moves from `state`, in a fixed order.
    fn enumerate_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Apply `mv` for `player`, producing a new state.
    fn apply(
        &self,
        state: &Self::State,
        mv: &Self::Move,
        player: Player,
    ) -> SearchResult<Self::State>;

    /// The finished game's result, or `None` if the game continues.
    fn outcome(&self, state: &Self::State) -> Option<GameResult>;

    /// Static estimate of a non-terminal state from `perspective`.
    fn heuristic_value(&self, state: &Self::State, perspective: Player) -> Score;

    // === Convenience Methods ===

    /// Check if the game is over.
    ///
    /// Default: a result exists or no moves remain.
    fn is_terminal(&self, state: &Self::State) -> bool {
        self.outcome(state).is_some() || self.enumerate_moves(state).is_empty()
    }

    /// Value of a terminal state from `perspective`.
    ///
    /// Default maps `outcome` onto `WIN`/`DRAW`/`LOSS`. A state that ended
    /// without a recorded result (no moves left) scores as a draw.
    fn terminal_value(&self, state: &Self::State, perspective: Player) -> Score {
        self.outcome(state)
            .map_or(Score::DRAW, |result| result.value_for(perspective))
    }

    /// Check whether `mv` is currently legal.
    fn is_legal(&self, state: &Self::State, mv: &Self::Move) -> bool {
        self.enumerate_moves(state).contains(mv)
    }
}
