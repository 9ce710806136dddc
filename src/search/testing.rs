//! Explicit game trees for engine unit tests.

use std::cell::Cell;

use crate::core::{Player, Score, SearchError, SearchResult};
use crate::game::{GameAdapter, GameResult};

/// A hand-written game tree. Leaves carry their value for MAX.
#[derive(Clone, Debug)]
pub enum Tree {
    Leaf(i32),
    Node(Vec<Tree>),
}

impl Tree {
    pub fn leaf(value: i32) -> Self {
        Tree::Leaf(value)
    }

    pub fn node(children: Vec<Tree>) -> Self {
        Tree::Node(children)
    }
}

/// Adapter over a `Tree`. States are paths of child indices from the root.
pub struct TreeGame {
    tree: Tree,
    heuristic: i32,
    rejected: Option<usize>,
    applied: Cell<usize>,
}

impl TreeGame {
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            heuristic: 0,
            rejected: None,
            applied: Cell::new(0),
        }
    }

    /// Score every cut-off inner node with `value`.
    pub fn with_heuristic(mut self, value: i32) -> Self {
        self.heuristic = value;
        self
    }

    /// Fail `apply` for move index `mv` anywhere in the tree.
    pub fn rejecting(mut self, mv: usize) -> Self {
        self.rejected = Some(mv);
        self
    }

    pub fn root(&self) -> Vec<usize> {
        Vec::new()
    }

    /// Number of `apply` calls so far.
    pub fn applied(&self) -> usize {
        self.applied.get()
    }

    fn at(&self, path: &[usize]) -> &Tree {
        path.iter().fold(&self.tree, |tree, &i| match tree {
            Tree::Node(children) => &children[i],
            Tree::Leaf(_) => tree,
        })
    }
}

impl GameAdapter for TreeGame {
    type State = Vec<usize>;
    type Move = usize;

    fn enumerate_moves(&self, state: &Vec<usize>) -> Vec<usize> {
        match self.at(state) {
            Tree::Node(children) => (0..children.len()).collect(),
            Tree::Leaf(_) => Vec::new(),
        }
    }

    fn apply(&self, state: &Vec<usize>, mv: &usize, _player: Player) -> SearchResult<Vec<usize>> {
        self.applied.set(self.applied.get() + 1);
        if self.rejected == Some(*mv) || !self.is_legal(state, mv) {
            return Err(SearchError::invalid_move(format!("no child {mv}")));
        }
        let mut child = state.clone();
        child.push(*mv);
        Ok(child)
    }

    fn outcome(&self, state: &Vec<usize>) -> Option<GameResult> {
        match self.at(state) {
            Tree::Leaf(v) if *v > 0 => Some(GameResult::Winner(Player::Maximizing)),
            Tree::Leaf(v) if *v < 0 => Some(GameResult::Winner(Player::Minimizing)),
            Tree::Leaf(_) => Some(GameResult::Draw),
            Tree::Node(_) => None,
        }
    }

    fn heuristic_value(&self, _state: &Vec<usize>, perspective: Player) -> Score {
        let value = Score::from(self.heuristic);
        if perspective.is_maximizing() {
            value
        } else {
            -value
        }
    }

    fn is_terminal(&self, state: &Vec<usize>) -> bool {
        matches!(self.at(state), Tree::Leaf(_))
    }

    fn terminal_value(&self, state: &Vec<usize>, perspective: Player) -> Score {
        let value = match self.at(state) {
            Tree::Leaf(v) => Score::from(*v),
            Tree::Node(_) => Score::DRAW,
        };
        if perspective.is_maximizing() {
            value
        } else {
            -value
        }
    }
}
