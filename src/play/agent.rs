//! Move-choosing agents.

use crate::core::{GameRng, Player, SearchError, SearchResult};
use crate::game::GameAdapter;
use crate::search::{select_move, SearchConfig, SearchStats};

/// Anything that can pick a move for `player` in `state`.
pub trait Agent<G: GameAdapter> {
    /// Choose a move. The match driver validates it through `apply`.
    fn choose(&mut self, game: &G, state: &G::State, player: Player) -> SearchResult<G::Move>;

    /// Short label for logs.
    fn name(&self) -> String;
}

/// Agent backed by the search engine.
#[derive(Clone, Debug)]
pub struct SearchAgent {
    config: SearchConfig,
    stats: SearchStats,
    decisions: u32,
}

impl SearchAgent {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::new(),
            decisions: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Work summed over every decision made so far.
    pub fn total_stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Number of moves chosen so far.
    pub fn decisions(&self) -> u32 {
        self.decisions
    }
}

impl<G: GameAdapter> Agent<G> for SearchAgent {
    fn choose(&mut self, game: &G, state: &G::State, player: Player) -> SearchResult<G::Move> {
        let decision = select_move(game, &self.config, state, player)?;
        self.stats.merge(&decision.stats);
        self.decisions += 1;
        Ok(decision.best_move)
    }

    fn name(&self) -> String {
        match self.config.depth_limit {
            Some(depth) => format!("{} depth {depth}", self.config.strategy),
            None => format!("{} complete", self.config.strategy),
        }
    }
}

/// Uniformly random legal moves from a seeded generator.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<G: GameAdapter> Agent<G> for RandomAgent {
    fn choose(&mut self, game: &G, state: &G::State, _player: Player) -> SearchResult<G::Move> {
        let moves = game.enumerate_moves(state);
        self.rng.choose(&moves).cloned().ok_or(SearchError::NoLegalMoves)
    }

    fn name(&self) -> String {
        format!("random (seed {})", self.rng.seed())
    }
}
