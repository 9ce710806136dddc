//! Minimax with alpha-beta pruning.
//!
//! `alpha` is the best value MAX can already guarantee on the current path,
//! `beta` the best value MIN can guarantee. Once `beta <= alpha` at a node
//! its remaining siblings cannot influence the root and are skipped.
//! Traversal order and tie-breaking are identical to `minimax`, so both
//! return the same root value and the same root move.

use crate::core::{Player, Score, SearchResult};
use crate::game::GameAdapter;

use super::context::{next_depth, NodeValue, SearchContext};
use super::outcome::SearchOutcome;

/// Alpha-beta search from `state` with `player` to move.
///
/// The root window is `(−∞, +∞)`. `depth_limit` behaves as in
/// [`minimax`](super::minimax::minimax).
pub fn alpha_beta<G: GameAdapter>(
    game: &G,
    state: &G::State,
    player: Player,
    depth_limit: Option<u32>,
) -> SearchResult<SearchOutcome<G::Move>> {
    let mut ctx = SearchContext::new(game);
    let (best_move, value) = alpha_beta_node(
        &mut ctx,
        state,
        player,
        (Score::NEG_INFINITY, Score::INFINITY),
        depth_limit,
        0,
    )?;
    Ok(SearchOutcome {
        best_move,
        value,
        stats: ctx.finish(),
    })
}

/// Alpha-beta to terminal states only.
pub fn alpha_beta_complete<G: GameAdapter>(
    game: &G,
    state: &G::State,
    player: Player,
) -> SearchResult<SearchOutcome<G::Move>> {
    alpha_beta(game, state, player, None)
}

/// Alpha-beta cut off `depth` plies below `state`.
pub fn alpha_beta_limited<G: GameAdapter>(
    game: &G,
    state: &G::State,
    player: Player,
    depth: u32,
) -> SearchResult<SearchOutcome<G::Move>> {
    alpha_beta(game, state, player, Some(depth))
}

fn alpha_beta_node<G: GameAdapter>(
    ctx: &mut SearchContext<'_, G>,
    state: &G::State,
    player: Player,
    window: (Score, Score),
    remaining: Option<u32>,
    ply: u32,
) -> SearchResult<NodeValue<G::Move>> {
    ctx.visit(ply);

    if let Some(value) = ctx.static_value(state, remaining) {
        return Ok((None, value));
    }

    let moves = ctx.game.enumerate_moves(state);
    if moves.is_empty() {
        return Ok((None, ctx.dead_end(state)));
    }

    let (mut alpha, mut beta) = window;
    let mut best_move = None;
    let mut best_value = Score::worst_for(player);

    for mv in moves {
        let child = ctx.child(state, &mv, player)?;
        let (_, value) = alpha_beta_node(
            ctx,
            &child,
            player.opposite(),
            (alpha, beta),
            next_depth(remaining),
            ply + 1,
        )?;

        if best_move.is_none() || value.improves_on(best_value, player) {
            best_value = value;
            best_move = Some(mv);
        }

        match player {
            Player::Maximizing => alpha = alpha.max(value),
            Player::Minimizing => beta = beta.min(value),
        }

        if beta <= alpha {
            ctx.stats.cutoffs += 1;
            break;
        }
    }

    Ok((best_move, best_value))
}
