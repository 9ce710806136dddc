//! Gravity-drop grid.
//!
//! Row 0 is the top of the grid. Cells live in a persistent `im::Vector`, so
//! every child board shares structure with its parent and cloning is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::SearchError;

/// Run length that wins.
pub const CONNECT: usize = 4;

/// A player's disc.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disc {
    Red,
    Yellow,
}

impl Disc {
    /// The other disc.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Disc::Red => Disc::Yellow,
            Disc::Yellow => Disc::Red,
        }
    }
}

/// Directions scanned for runs: right, down, down-right, up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// An R×C connect-four grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vector<Option<Disc>>,
}

impl Board {
    /// An empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one row and column");
        Self {
            rows,
            cols,
            cells: std::iter::repeat(None).take(rows * cols).collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Disc at (`row`, `col`). Out-of-range cells read as empty.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Disc> {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col]
        } else {
            None
        }
    }

    /// True if `col` exists and its top cell is empty.
    #[must_use]
    pub fn is_playable(&self, col: usize) -> bool {
        col < self.cols && self.get(0, col).is_none()
    }

    /// Playable columns, left to right.
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols).filter(|&col| self.is_playable(col))
    }

    /// Row a disc dropped into `col` would land in.
    #[must_use]
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.get(row, col).is_none())
    }

    /// Copy of this board with `disc` dropped into `col`.
    ///
    /// Returns `None` if the column is missing or full.
    #[must_use]
    pub fn drop_disc(&self, col: usize, disc: Disc) -> Option<Self> {
        let row = self.landing_row(col)?;
        let mut next = self.clone();
        next.cells.set(row * self.cols + col, Some(disc));
        Some(next)
    }

    /// True if every column is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.playable_columns().next().is_none()
    }

    /// The disc owning a run of four, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Disc> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let Some(disc) = self.get(row, col) else {
                    continue;
                };
                for (dr, dc) in DIRECTIONS {
                    if self.run_length(row, col, dr, dc, disc, CONNECT) == CONNECT {
                        return Some(disc);
                    }
                }
            }
        }
        None
    }

    /// Number of horizontal and vertical windows of `length` cells that are
    /// all `disc`.
    #[must_use]
    pub fn count_windows(&self, disc: Disc, length: usize) -> usize {
        let mut count = 0;
        for row in 0..self.rows {
            for col in 0..self.cols {
                for (dr, dc) in [(0, 1), (1, 0)] {
                    if self.run_length(row, col, dr, dc, disc, length) == length {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// First column holding a disc directly above an empty cell.
    fn floating_column(&self) -> Option<usize> {
        (0..self.cols).find(|&col| {
            (1..self.rows).any(|row| self.get(row - 1, col).is_some() && self.get(row, col).is_none())
        })
    }

    /// Consecutive `disc` cells from (`row`, `col`) along (`dr`, `dc`),
    /// capped at `limit`.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, disc: Disc, limit: usize) -> usize {
        let mut length = 0;
        let (mut r, mut c) = (row as isize, col as isize);
        while length < limit
            && r >= 0
            && c >= 0
            && self.get(r as usize, c as usize) == Some(disc)
        {
            length += 1;
            r += dr;
            c += dc;
        }
        length
    }
}

impl FromStr for Board {
    type Err = SearchError;

    /// Parse rows top to bottom, separated by `/` or newlines, using `R`,
    /// `Y` and `.`. Every disc must rest on the floor or on another disc.
    ///
    /// ```
    /// use rust_minimax::games::connect_four::{Board, Disc};
    ///
    /// let board: Board = "..../..../.Y../RR..".parse().unwrap();
    /// assert_eq!((board.rows(), board.cols()), (4, 4));
    /// assert_eq!(board.get(3, 0), Some(Disc::Red));
    /// assert_eq!(board.get(2, 1), Some(Disc::Yellow));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        let cols = rows.first().map_or(0, |row| row.chars().count());
        if rows.is_empty() || cols == 0 || rows.iter().any(|row| row.chars().count() != cols) {
            return Err(SearchError::Parse("rows must be non-empty and equally wide".into()));
        }

        let mut cells = Vector::new();
        for symbol in rows.iter().flat_map(|row| row.chars()) {
            cells.push_back(match symbol.to_ascii_uppercase() {
                'R' => Some(Disc::Red),
                'Y' => Some(Disc::Yellow),
                '.' | '_' => None,
                other => {
                    return Err(SearchError::Parse(format!(
                        "unexpected cell symbol {other:?}"
                    )))
                }
            });
        }

        let board = Self {
            rows: rows.len(),
            cols,
            cells,
        };
        if let Some(col) = board.floating_column() {
            return Err(SearchError::Parse(format!(
                "column {col} has a disc above an empty cell"
            )));
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                let symbol = match self.get(row, col) {
                    Some(Disc::Red) => 'R',
                    Some(Disc::Yellow) => 'Y',
                    None => '.',
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}
