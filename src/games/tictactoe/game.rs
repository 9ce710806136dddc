//! Tic-tac-toe adapter.

use crate::core::{Player, Score, SearchError, SearchResult};
use crate::game::{GameAdapter, GameResult};

use super::board::{Board, Cell, Mark};

/// Tic-tac-toe rules with a configurable mark for the maximizing role.
#[derive(Clone, Copy, Debug)]
pub struct TicTacToe {
    max_mark: Mark,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self { max_mark: Mark::X }
    }
}

impl TicTacToe {
    /// X maximizes, O minimizes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `mark` play the maximizing role.
    pub fn with_maximizer(mut self, mark: Mark) -> Self {
        self.max_mark = mark;
        self
    }

    /// The empty starting board.
    pub fn empty_board() -> Board {
        Board::new()
    }

    /// Mark placed by `player`.
    #[must_use]
    pub fn mark_for(&self, player: Player) -> Mark {
        match player {
            Player::Maximizing => self.max_mark,
            Player::Minimizing => self.max_mark.other(),
        }
    }

    /// Role played by `mark`.
    #[must_use]
    pub fn role_of(&self, mark: Mark) -> Player {
        if mark == self.max_mark {
            Player::Maximizing
        } else {
            Player::Minimizing
        }
    }
}

impl GameAdapter for TicTacToe {
    type State = Board;
    type Move = Cell;

    fn enumerate_moves(&self, board: &Board) -> Vec<Cell> {
        if board.winner().is_some() {
            return Vec::new();
        }
        board.open_cells().collect()
    }

    fn apply(&self, board: &Board, cell: &Cell, player: Player) -> SearchResult<Board> {
        if let Some(mark) = board.winner() {
            return Err(SearchError::invalid_move(format!(
                "game already won by {mark:?}"
            )));
        }
        if !board.is_open(*cell) {
            return Err(SearchError::invalid_move(format!(
                "cell ({}, {}) is not open",
                cell.row, cell.col
            )));
        }
        Ok(board.with_mark(*cell, self.mark_for(player)))
    }

    fn outcome(&self, board: &Board) -> Option<GameResult> {
        match board.winner() {
            Some(mark) => Some(GameResult::Winner(self.role_of(mark))),
            None if board.is_full() => Some(GameResult::Draw),
            None => None,
        }
    }

    /// Only completed lines score, so every unfinished board is even.
    fn heuristic_value(&self, _board: &Board, _perspective: Player) -> Score {
        Score::DRAW
    }

    fn is_terminal(&self, board: &Board) -> bool {
        board.winner().is_some() || board.is_full()
    }
}
