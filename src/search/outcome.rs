//! What a search hands back.

use crate::core::Score;

use super::stats::SearchStats;

/// Raw result of one of the traversal strategies.
///
/// `best_move` is `None` when the root was scored statically (terminal, or
/// a depth limit of zero).
#[derive(Clone, Debug)]
pub struct SearchOutcome<M> {
    /// First move achieving `value`, in adapter order.
    pub best_move: Option<M>,
    /// Value of the root for the maximizing player.
    pub value: Score,
    /// Counters for this search only.
    pub stats: SearchStats,
}

/// The move selector's answer: always carries a move.
#[derive(Clone, Debug)]
pub struct Decision<M> {
    /// Move to play.
    pub best_move: M,
    /// Value the move achieves under optimal play (to the searched depth).
    pub value: Score,
    /// Counters for this search only.
    pub stats: SearchStats,
}

impl<M> Decision<M> {
    /// The `(move, value)` pair, dropping statistics.
    pub fn into_pair(self) -> (M, Score) {
        (self.best_move, self.value)
    }
}
