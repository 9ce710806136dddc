//! Connect-four adapter.

use crate::core::{Player, Score, SearchError, SearchResult};
use crate::game::{GameAdapter, GameResult};

use super::board::{Board, Disc};

/// Pattern weights used by the heuristic.
const PAIR_WEIGHT: f64 = 1.0;
const TRIPLE_WEIGHT: f64 = 10.0;
const FOUR_WEIGHT: f64 = 1000.0;

/// Connect-four rules on a configurable grid.
#[derive(Clone, Copy, Debug)]
pub struct ConnectFour {
    rows: usize,
    cols: usize,
    max_disc: Disc,
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 7,
            max_disc: Disc::Red,
        }
    }
}

impl ConnectFour {
    /// Standard 6×7 grid, red maximizes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid with `rows` rows and `cols` columns.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "ConnectFour needs at least one row and column");
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Let `disc` play the maximizing role.
    pub fn with_maximizer(mut self, disc: Disc) -> Self {
        self.max_disc = disc;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// An empty grid of the configured size.
    pub fn empty_board(&self) -> Board {
        Board::new(self.rows, self.cols)
    }

    /// Disc dropped by `player`.
    #[must_use]
    pub fn disc_for(&self, player: Player) -> Disc {
        match player {
            Player::Maximizing => self.max_disc,
            Player::Minimizing => self.max_disc.other(),
        }
    }

    /// Role played by `disc`.
    #[must_use]
    pub fn role_of(&self, disc: Disc) -> Player {
        if disc == self.max_disc {
            Player::Maximizing
        } else {
            Player::Minimizing
        }
    }

    /// Raw pattern score for `perspective`, before clamping.
    ///
    /// Own pairs and triples count in favour, opposing triples and fours
    /// against. Only horizontal and vertical windows are scanned.
    #[must_use]
    pub fn pattern_score(&self, board: &Board, perspective: Player) -> f64 {
        let own = self.disc_for(perspective);
        let opp = own.other();

        PAIR_WEIGHT * board.count_windows(own, 2) as f64
            + TRIPLE_WEIGHT * board.count_windows(own, 3) as f64
            + FOUR_WEIGHT * board.count_windows(own, 4) as f64
            - TRIPLE_WEIGHT * board.count_windows(opp, 3) as f64
            - FOUR_WEIGHT * board.count_windows(opp, 4) as f64
    }
}

impl GameAdapter for ConnectFour {
    type State = Board;
    type Move = usize;

    fn enumerate_moves(&self, board: &Board) -> Vec<usize> {
        if board.winner().is_some() {
            return Vec::new();
        }
        board.playable_columns().collect()
    }

    fn apply(&self, board: &Board, col: &usize, player: Player) -> SearchResult<Board> {
        if let Some(disc) = board.winner() {
            return Err(SearchError::invalid_move(format!(
                "game already won by {disc:?}"
            )));
        }
        board
            .drop_disc(*col, self.disc_for(player))
            .ok_or_else(|| SearchError::invalid_move(format!("column {col} is full or missing")))
    }

    fn outcome(&self, board: &Board) -> Option<GameResult> {
        match board.winner() {
            Some(disc) => Some(GameResult::Winner(self.role_of(disc))),
            None if board.is_full() => Some(GameResult::Draw),
            None => None,
        }
    }

    fn heuristic_value(&self, board: &Board, perspective: Player) -> Score {
        Score::heuristic(self.pattern_score(board, perspective))
    }

    fn is_terminal(&self, board: &Board) -> bool {
        board.winner().is_some() || board.is_full()
    }
}
