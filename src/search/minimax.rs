//! Plain Minimax.
//!
//! Every child of every node is scored. The maximizing role keeps the move
//! with the strictly greatest child value, the minimizing role the strictly
//! least; on equal values the first move in adapter order wins.

use crate::core::{Player, Score, SearchResult};
use crate::game::GameAdapter;

use super::context::{next_depth, NodeValue, SearchContext};
use super::outcome::SearchOutcome;

/// Minimax from `state` with `player` to move.
///
/// `depth_limit: None` searches to terminal states; `Some(d)` scores states
/// `d` plies down with the adapter's heuristic. `Some(0)` scores the root
/// itself without applying any move.
pub fn minimax<G: GameAdapter>(
    game: &G,
    state: &G::State,
    player: Player,
    depth_limit: Option<u32>,
) -> SearchResult<SearchOutcome<G::Move>> {
    let mut ctx = SearchContext::new(game);
    let (best_move, value) = minimax_node(&mut ctx, state, player, depth_limit, 0)?;
    Ok(SearchOutcome {
        best_move,
        value,
        stats: ctx.finish(),
    })
}

/// Minimax to terminal states only.
pub fn minimax_complete<G: GameAdapter>(
    game: &G,
    state: &G::State,
    player: Player,
) -> SearchResult<SearchOutcome<G::Move>> {
    minimax(game, state, player, None)
}

/// Minimax cut off `depth` plies below `state`.
pub fn minimax_limited<G: GameAdapter>(
    game: &G,
    state: &G::State,
    player: Player,
    depth: u32,
) -> SearchResult<SearchOutcome<G::Move>> {
    minimax(game, state, player, Some(depth))
}

fn minimax_node<G: GameAdapter>(
    ctx: &mut SearchContext<'_, G>,
    state: &G::State,
    player: Player,
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

    let mut best_move = None;
    let mut best_value = Score::worst_for(player);

    for mv in moves {
        let child = ctx.child(state, &mv, player)?;
        let (_, value) = minimax_node(ctx, &child, player.opposite(), next_depth(remaining), ply + 1)?;

        if best_move.is_none() || value.improves_on(best_value, player) {
            best_value = value;
            best_move = Some(mv);
        }
    }

    Ok((best_move, best_value))
}
