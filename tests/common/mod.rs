//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::cell::Cell;

use rust_minimax::core::{Player, Score, SearchResult};
use rust_minimax::game::{GameAdapter, GameResult};

/// Walk from `root` by picking `choices[i] % moves.len()` at each ply.
///
/// Stops early at a terminal state. Returns the reached state and the role
/// to move there.
pub fn reach<G: GameAdapter>(
    game: &G,
    root: &G::State,
    first: Player,
    choices: &[usize],
) -> (G::State, Player) {
    let mut state = root.clone();
    let mut player = first;
    for &choice in choices {
        let moves = game.enumerate_moves(&state);
        if game.is_terminal(&state) || moves.is_empty() {
            break;
        }
        let mv = &moves[choice % moves.len()];
        state = game.apply(&state, mv, player).expect("enumerated moves are legal");
        player = player.opposite();
    }
    (state, player)
}

/// A state tagged with the number of plies applied since the search root.
#[derive(Clone, Debug)]
pub struct Tracked<S> {
    pub state: S,
    pub depth: u32,
}

/// Adapter wrapper that records how deep `apply` ever went.
pub struct DepthTracker<G> {
    inner: G,
    deepest: Cell<u32>,
    applies: Cell<u64>,
}

impl<G: GameAdapter> DepthTracker<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            deepest: Cell::new(0),
            applies: Cell::new(0),
        }
    }

    pub fn root(&self, state: G::State) -> Tracked<G::State> {
        Tracked { state, depth: 0 }
    }

    /// Longest chain of `apply` calls from the root.
    pub fn deepest(&self) -> u32 {
        self.deepest.get()
    }

    pub fn applies(&self) -> u64 {
        self.applies.get()
    }

    pub fn reset(&self) {
        self.deepest.set(0);
        self.applies.set(0);
    }
}

impl<G: GameAdapter> GameAdapter for DepthTracker<G> {
    type State = Tracked<G::State>;
    type Move = G::Move;

    fn enumerate_moves(&self, state: &Self::State) -> Vec<Self::Move> {
        self.inner.enumerate_moves(&state.state)
    }

    fn apply(&self, state: &Self::State, mv: &Self::Move, player: Player) -> SearchResult<Self::State> {
        let next = self.inner.apply(&state.state, mv, player)?;
        let depth = state.depth + 1;
        self.applies.set(self.applies.get() + 1);
        self.deepest.set(self.deepest.get().max(depth));
        Ok(Tracked { state: next, depth })
    }

    fn outcome(&self, state: &Self::State) -> Option<GameResult> {
        self.inner.outcome(&state.state)
    }

    fn heuristic_value(&self, state: &Self::State, perspective: Player) -> Score {
        self.inner.heuristic_value(&state.state, perspective)
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        self.inner.is_terminal(&state.state)
    }

    fn terminal_value(&self, state: &Self::State, perspective: Player) -> Score {
        self.inner.terminal_value(&state.state, perspective)
    }
}
