//! Pluggable static evaluation.
//!
//! Heuristics are the least principled part of any game adapter, so they can
//! be swapped without touching the rules: `WithHeuristic` forwards every
//! rule query to the wrapped adapter and answers `heuristic_value` with a
//! caller-supplied scoring function.

use crate::core::{Player, Score, SearchResult};

use super::adapter::{GameAdapter, GameResult};

/// An adapter with its heuristic replaced by `eval`.
///
/// ```
/// use rust_minimax::core::{Player, Score};
/// use rust_minimax::game::{GameAdapter, WithHeuristic};
/// use rust_minimax::games::nim::Nim;
///
/// let game = WithHeuristic::new(Nim::new(), |_state, _perspective| Score::from(3));
/// let state = game.inner().initial_state(Player::Maximizing);
/// assert_eq!(game.heuristic_value(&state, Player::Maximizing), Score::from(3));
/// ```
#[derive(Clone)]
pub struct WithHeuristic<G, F> {
    inner: G,
    eval: F,
}

impl<G, F> WithHeuristic<G, F>
where
    G: GameAdapter,
    F: Fn(&G::State, Player) -> Score,
{
    /// Wrap `inner`, scoring non-terminal states with `eval`.
    pub fn new(inner: G, eval: F) -> Self {
        Self { inner, eval }
    }

    /// The wrapped adapter.
    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G, F> GameAdapter for WithHeuristic<G, F>
where
    G: GameAdapter,
    F: Fn(&G::State, Player) -> Score,
{
    type State = G::State;
    type Move = G::Move;

    fn enumerate_moves(&self, state: &Self::State) -> Vec<Self::Move> {
        self.inner.enumerate_moves(state)
    }

    fn apply(
        &self,
        state: &Self::State,
        mv: &Self::Move,
        player: Player,
    ) -> SearchResult<Self::State> {
        self.inner.apply(state, mv, player)
    }

    fn outcome(&self, state: &Self::State) -> Option<GameResult> {
        self.inner.outcome(state)
    }

    fn heuristic_value(&self, state: &Self::State, perspective: Player) -> Score {
        (self.eval)(state, perspective)
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        self.inner.is_terminal(state)
    }

    fn terminal_value(&self, state: &Self::State, perspective: Player) -> Score {
        self.inner.terminal_value(state, perspective)
    }
}
