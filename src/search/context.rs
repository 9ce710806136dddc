//! Per-call search state shared by the traversal strategies.

use std::time::Instant;

use crate::core::{Player, Score, SearchResult};
use crate::game::GameAdapter;

use super::stats::SearchStats;

/// A node's best move (if it has children) and its value for the
/// maximizing player.
pub(crate) type NodeValue<M> = (Option<M>, Score);

/// Borrowed adapter plus the counters for a single search invocation.
pub(crate) struct SearchContext<'g, G: GameAdapter> {
    pub game: &'g G,
    pub stats: SearchStats,
    start: Instant,
}

impl<'g, G: GameAdapter> SearchContext<'g, G> {
    pub fn new(game: &'g G) -> Self {
        Self {
            game,
            stats: SearchStats::default(),
            start: Instant::now(),
        }
    }

    /// Count a visit to a node `ply` plies below the root.
    #[inline]
    pub fn visit(&mut self, ply: u32) {
        self.stats.nodes_visited += 1;
        if ply > self.stats.max_depth {
            self.stats.max_depth = ply;
        }
    }

    /// Static value of `state` if the traversal must stop here.
    ///
    /// Terminal states take priority over an exhausted depth budget, so a
    /// proven result is never replaced by a heuristic estimate.
    pub fn static_value(&mut self, state: &G::State, remaining: Option<u32>) -> Option<Score> {
        let value = if self.game.is_terminal(state) {
            self.game.terminal_value(state, Player::Maximizing)
        } else if remaining == Some(0) {
            self.game.heuristic_value(state, Player::Maximizing)
        } else {
            return None;
        };
        self.stats.leaf_evaluations += 1;
        log::trace!("leaf {:?} = {}", state, value);
        Some(value)
    }

    /// Value for a node that is not terminal but offers no moves.
    pub fn dead_end(&mut self, state: &G::State) -> Score {
        self.stats.leaf_evaluations += 1;
        self.game.terminal_value(state, Player::Maximizing)
    }

    /// Apply `mv` for `player`. Adapter errors propagate untouched.
    #[inline]
    pub fn child(&self, state: &G::State, mv: &G::Move, player: Player) -> SearchResult<G::State> {
        self.game.apply(state, mv, player)
    }

    /// Stop the clock and hand back the counters.
    pub fn finish(mut self) -> SearchStats {
        self.stats.time_us = self.start.elapsed().as_micros() as u64;
        self.stats
    }
}

/// Budget for the children of a node with `remaining` plies left.
#[inline]
pub(crate) fn next_depth(remaining: Option<u32>) -> Option<u32> {
    remaining.map(|d| d.saturating_sub(1))
}
