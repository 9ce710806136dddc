//! Match driver: alternates two agents until the game ends.

use serde::{Deserialize, Serialize};

use crate::core::{Player, SearchResult};
use crate::game::{GameAdapter, GameResult};

use super::agent::Agent;
use super::config::{ConfiguredAgent, MatchConfig};

/// One move in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply<M> {
    /// Role that moved.
    pub player: Player,
    /// The move played.
    pub mv: M,
}

/// A finished (or truncated) match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchRecord<S, M> {
    /// Role that moved first.
    pub first: Player,

    /// Moves in the order they were played.
    pub moves: Vec<Ply<M>>,

    /// State after the last move.
    pub final_state: S,

    /// How the game ended, or `None` if the ply limit was reached first.
    pub result: Option<GameResult>,
}

impl<S, M> MatchRecord<S, M> {
    /// Number of plies played.
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// True if the game reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    /// Winning role, if the game was decided.
    pub fn winner(&self) -> Option<Player> {
        match self.result {
            Some(GameResult::Winner(player)) => Some(player),
            _ => None,
        }
    }
}

/// Play `game` from `root` with `first` to move.
///
/// Every chosen move goes through `apply`, so an agent that picks an illegal
/// move ends the match with `InvalidMove`. The match stops at a terminal
/// state or after `max_plies` moves.
pub fn play_match<G, A, B>(
    game: &G,
    root: &G::State,
    first: Player,
    maximizer: &mut A,
    minimizer: &mut B,
    max_plies: usize,
) -> SearchResult<MatchRecord<G::State, G::Move>>
where
    G: GameAdapter,
    A: Agent<G> + ?Sized,
    B: Agent<G> + ?Sized,
{
    log::debug!(
        "match: {} (MAX) vs {} (MIN), {first} moves first",
        maximizer.name(),
        minimizer.name()
    );

    let mut state = root.clone();
    let mut player = first;
    let mut moves = Vec::new();

    while moves.len() < max_plies && !game.is_terminal(&state) {
        let mv = match player {
            Player::Maximizing => maximizer.choose(game, &state, player)?,
            Player::Minimizing => minimizer.choose(game, &state, player)?,
        };
        state = game.apply(&state, &mv, player)?;
        log::debug!("ply {}: {player} played {mv:?}", moves.len() + 1);

        moves.push(Ply { player, mv });
        player = player.opposite();
    }

    let result = game
        .is_terminal(&state)
        .then(|| game.outcome(&state).unwrap_or(GameResult::Draw));

    match result {
        Some(GameResult::Winner(winner)) => {
            log::info!("{winner} won after {} plies", moves.len())
        }
        Some(GameResult::Draw) => log::info!("draw after {} plies", moves.len()),
        None => log::info!("stopped unfinished after {} plies", moves.len()),
    }

    Ok(MatchRecord {
        first,
        moves,
        final_state: state,
        result,
    })
}

/// Build both agents from `config` and play the match.
///
/// The first mover is `config.first_mover()`. When the root state records
/// whose turn it is, build it from that same call.
pub fn run_match<G: GameAdapter>(
    game: &G,
    root: &G::State,
    config: &MatchConfig,
) -> SearchResult<MatchRecord<G::State, G::Move>> {
    config.validate()?;
    let mut maximizer = config.maximizer.build();
    let mut minimizer = config.minimizer.build();
    let record = play_match(
        game,
        root,
        config.first_mover(),
        &mut maximizer,
        &mut minimizer,
        config.max_plies,
    )?;

    for (player, agent) in Player::both().zip([&maximizer, &minimizer]) {
        if let ConfiguredAgent::Search(agent) = agent {
            let stats = agent.total_stats();
            log::info!(
                "{player}: {} decisions, {} nodes, {:.0} nodes/s",
                agent.decisions(),
                stats.nodes_visited,
                stats.nodes_per_second()
            );
        }
    }
    Ok(record)
}
