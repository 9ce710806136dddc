//! Tic-tac-toe board representation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::SearchError;

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other mark.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell coordinate; the move type of tic-tac-toe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True for the four corners.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        (self.row == 0 || self.row == 2) && (self.col == 0 || self.col == 2)
    }

    /// True for the middle cell.
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }
}

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A 3x3 board. Small enough to copy at every node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Mark>; 3]; 3],
}

impl Board {
    /// The empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark at `cell`, if any. Out-of-range cells read as empty.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.cells.get(cell.row)?.get(cell.col).copied().flatten()
    }

    /// True if `cell` is on the board and unmarked.
    #[must_use]
    pub fn is_open(&self, cell: Cell) -> bool {
        cell.row < 3 && cell.col < 3 && self.cells[cell.row][cell.col].is_none()
    }

    /// Copy of this board with `cell` marked.
    ///
    /// The caller checks `is_open` first.
    #[must_use]
    pub(crate) fn with_mark(mut self, cell: Cell, mark: Mark) -> Self {
        self.cells[cell.row][cell.col] = Some(mark);
        self
    }

    /// Empty cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..3)
            .flat_map(|row| (0..3).map(move |col| Cell::new(row, col)))
            .filter(|&cell| self.is_open(cell))
    }

    /// True if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.open_cells().next().is_none()
    }

    /// The mark that completed a line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|(r, col)| self.cells[r][col]);
            match (a, b, c) {
                (Some(a), Some(b), Some(c)) if a == b && b == c => Some(a),
                _ => None,
            }
        })
    }

    /// Number of marks placed by `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&m| m == Some(mark))
            .count()
    }
}

impl FromStr for Board {
    type Err = SearchError;

    /// Parse nine cells (`X`, `O`, `.` or `_`), ignoring whitespace and `/`.
    ///
    /// ```
    /// use rust_minimax::games::tictactoe::{Board, Cell, Mark};
    ///
    /// let board: Board = "XO./.X./..O".parse().unwrap();
    /// assert_eq!(board.get(Cell::new(0, 1)), Some(Mark::O));
    /// assert_eq!(board.get(Cell::new(2, 0)), None);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if symbols.len() != 9 {
            return Err(SearchError::Parse(format!(
                "expected 9 cells, found {}",
                symbols.len()
            )));
        }

        let mut board = Board::new();
        for (i, symbol) in symbols.into_iter().enumerate() {
            board.cells[i / 3][i % 3] = match symbol.to_ascii_uppercase() {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '.' | '_' => None,
                other => {
                    return Err(SearchError::Parse(format!(
                        "unexpected cell symbol {other:?}"
                    )))
                }
            };
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let symbol = match cell {
                    Some(Mark::X) => 'X',
                    Some(Mark::O) => 'O',
                    None => '.',
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}
