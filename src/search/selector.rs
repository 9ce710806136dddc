//! Top-level move selection.
//!
//! The selector owns a game adapter and a `SearchConfig`, and answers "which
//! move should `player` make from this state?". It holds no mutable state, so
//! the same call always produces the same answer.

use crate::core::{Player, Score, SearchError, SearchResult};
use crate::game::GameAdapter;

use super::alpha_beta::alpha_beta;
use super::config::{SearchConfig, Strategy};
use super::context::next_depth;
use super::minimax::minimax;
use super::outcome::{Decision, SearchOutcome};

/// Chooses moves with the configured strategy.
///
/// ```
/// use rust_minimax::core::{Player, Score};
/// use rust_minimax::games::nim::Nim;
/// use rust_minimax::search::{MoveSelector, SearchConfig};
///
/// let selector = MoveSelector::new(Nim::with_heaps(&[1, 2]), SearchConfig::alpha_beta_complete());
/// let root = selector.game().initial_state(Player::Maximizing);
/// let decision = selector.select(&root, Player::Maximizing).unwrap();
///
/// // 1 ^ 2 != 0: the first player wins by equalizing the heaps.
/// assert_eq!(decision.value, Score::WIN);
/// ```
#[derive(Clone, Debug)]
pub struct MoveSelector<G: GameAdapter> {
    game: G,
    config: SearchConfig,
}

impl<G: GameAdapter> MoveSelector<G> {
    /// Create a new selector.
    pub fn new(game: G, config: SearchConfig) -> Self {
        Self { game, config }
    }

    /// Get the adapter.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Best move for `player` from `root`, with its value.
    ///
    /// Fails with `Config` for an invalid configuration, then with
    /// `NoLegalMoves` if the game is already over at `root`. Adapter errors
    /// propagate unchanged.
    pub fn select(&self, root: &G::State, player: Player) -> SearchResult<Decision<G::Move>> {
        select_move(&self.game, &self.config, root, player)
    }

    /// Value of every legal move for `player` from `root`, in adapter order.
    ///
    /// Each child is searched on its own with a full window, so every value
    /// is exact (pruning only happens inside a child's subtree).
    pub fn score_moves(&self, root: &G::State, player: Player) -> SearchResult<Vec<(G::Move, Score)>> {
        check_root(&self.game, &self.config, root)?;

        let remaining = next_depth(self.config.depth_limit);
        self.game
            .enumerate_moves(root)
            .into_iter()
            .map(|mv| {
                let child = self.game.apply(root, &mv, player)?;
                let outcome = run(&self.game, &self.config, &child, player.opposite(), remaining)?;
                Ok((mv, outcome.value))
            })
            .collect()
    }
}

/// Best move for `player` from `root` under `config`, for callers that do
/// not own the adapter.
pub fn select_move<G: GameAdapter>(
    game: &G,
    config: &SearchConfig,
    root: &G::State,
    player: Player,
) -> SearchResult<Decision<G::Move>> {
    check_root(game, config, root)?;

    let outcome = run(game, config, root, player, config.depth_limit)?;
    let best_move = outcome.best_move.ok_or(SearchError::NoLegalMoves)?;

    log::debug!(
        "{} ({}) chose {:?} = {} after {} nodes",
        player,
        config.strategy,
        best_move,
        outcome.value,
        outcome.stats.nodes_visited
    );

    Ok(Decision {
        best_move,
        value: outcome.value,
        stats: outcome.stats,
    })
}

fn check_root<G: GameAdapter>(game: &G, config: &SearchConfig, root: &G::State) -> SearchResult<()> {
    config.validate()?;
    if game.is_terminal(root) || game.enumerate_moves(root).is_empty() {
        return Err(SearchError::NoLegalMoves);
    }
    Ok(())
}

fn run<G: GameAdapter>(
    game: &G,
    config: &SearchConfig,
    state: &G::State,
    player: Player,
    depth_limit: Option<u32>,
) -> SearchResult<SearchOutcome<G::Move>> {
    match config.strategy {
        Strategy::Minimax => minimax(game, state, player, depth_limit),
        Strategy::AlphaBeta => alpha_beta(game, state, player, depth_limit),
    }
}
