//! Heap state, moves and the Nim adapter.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::core::{Player, Score, SearchError, SearchResult};
use crate::game::{GameAdapter, GameResult};

/// Magnitude of the nim-sum estimate. Large enough to dominate nothing but
/// itself, and strictly inside the proven range.
pub const NIM_HEURISTIC: f64 = 1000.0;

/// Heaps stored inline; typical games have a handful.
pub type Heaps = SmallVec<[u32; 8]>;

/// Remove `count` objects from heap `heap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Take {
    pub heap: usize,
    pub count: u32,
}

impl Take {
    #[must_use]
    pub const fn new(heap: usize, count: u32) -> Self {
        Self { heap, count }
    }
}

impl fmt::Display for Take {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "take {} from heap {}", self.count, self.heap)
    }
}

/// Heap sizes plus the role whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimState {
    heaps: Heaps,
    to_move: Player,
}

impl NimState {
    pub fn new(heaps: &[u32], to_move: Player) -> Self {
        Self {
            heaps: SmallVec::from_slice(heaps),
            to_move,
        }
    }

    pub fn heaps(&self) -> &[u32] {
        &self.heaps
    }

    /// Role that moves next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// XOR of all heap sizes.
    #[must_use]
    pub fn nim_sum(&self) -> u32 {
        self.heaps.iter().fold(0, |acc, &h| acc ^ h)
    }

    /// True once every heap is empty.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.heaps.iter().all(|&h| h == 0)
    }

    /// Objects left across all heaps.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.heaps.iter().map(|&h| u64::from(h)).sum()
    }
}

/// Nim with a configurable starting position.
#[derive(Clone, Debug)]
pub struct Nim {
    heaps: Heaps,
}

impl Default for Nim {
    fn default() -> Self {
        Self::with_heaps(&[1, 3, 5, 7])
    }
}

impl Nim {
    /// The classic 1-3-5-7 layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `heaps`.
    pub fn with_heaps(heaps: &[u32]) -> Self {
        assert!(!heaps.is_empty(), "Nim needs at least one heap");
        Self {
            heaps: SmallVec::from_slice(heaps),
        }
    }

    /// Starting heap sizes.
    pub fn heaps(&self) -> &[u32] {
        &self.heaps
    }

    /// Starting position with `first` to move.
    pub fn initial_state(&self, first: Player) -> NimState {
        NimState::new(&self.heaps, first)
    }
}

impl GameAdapter for Nim {
    type State = NimState;
    type Move = Take;

    fn enumerate_moves(&self, state: &NimState) -> Vec<Take> {
        state
            .heaps
            .iter()
            .enumerate()
            .flat_map(|(heap, &size)| (1..=size).map(move |count| Take::new(heap, count)))
            .collect()
    }

    fn apply(&self, state: &NimState, take: &Take, player: Player) -> SearchResult<NimState> {
        if player != state.to_move {
            return Err(SearchError::invalid_move(format!(
                "{player} moved but it is {}'s turn",
                state.to_move
            )));
        }
        let Some(&size) = state.heaps.get(take.heap) else {
            return Err(SearchError::invalid_move(format!(
                "heap {} does not exist",
                take.heap
            )));
        };
        if take.count == 0 || take.count > size {
            return Err(SearchError::invalid_move(format!(
                "cannot take {} from a heap of {size}",
                take.count
            )));
        }

        let mut next = state.clone();
        next.heaps[take.heap] -= take.count;
        next.to_move = player.opposite();
        Ok(next)
    }

    /// The player who emptied the last heap wins.
    fn outcome(&self, state: &NimState) -> Option<GameResult> {
        state
            .is_cleared()
            .then(|| GameResult::Winner(state.to_move.opposite()))
    }

    /// Nim-sum estimate: a zero nim-sum loses for the player to move.
    fn heuristic_value(&self, state: &NimState, perspective: Player) -> Score {
        let mover_wins = state.nim_sum() != 0;
        let perspective_wins = mover_wins == (state.to_move == perspective);
        Score::heuristic(if perspective_wins {
            NIM_HEURISTIC
        } else {
            -NIM_HEURISTIC
        })
    }

    fn is_terminal(&self, state: &NimState) -> bool {
        state.is_cleared()
    }
}
