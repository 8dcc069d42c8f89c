//! The Board representation.
//!
//! Rows are stored, columns are derived. Boards are expected to be
//! rectangular, but nothing enforces it: the width of a board is the
//! length of its longest row, and rows that are too short to reach a
//! given column are skipped when that column is read.
//!

use std::fmt;

/// A grid of single characters, stored row by row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board(Vec<Vec<char>>);

impl Board {
    /// Build a board from text lines, one character per cell.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        Board(lines.iter().map(|l| l.as_ref().chars().collect()).collect())
    }

    /// The rows of the board, top to bottom.
    pub fn rows(&self) -> &[Vec<char>] {
        &self.0
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.0.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.0.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if all rows have the same length.
    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.0.iter().all(|r| r.len() == width)
    }
}

impl From<Vec<Vec<char>>> for Board {
    fn from(rows: Vec<Vec<char>>) -> Self {
        Board(rows)
    }
}

impl From<Board> for Vec<Vec<char>> {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}

/// Return the characters of row `row_index` as a single string.
///
/// An out-of-range row gives the empty string.
///
/// ```
/// use fd_wordsearch::{Board, make_str_from_row};
/// let board = Board::from_lines(&["ANTT", "XSOB"]);
/// assert_eq!(make_str_from_row(&board, 0), "ANTT");
/// ```
pub fn make_str_from_row(board: &Board, row_index: usize) -> String {
    board.rows().get(row_index)
        .map(|row| row.iter().collect())
        .unwrap_or_default()
}

/// Return the characters of column `column_index`, top to bottom, as a
/// single string.
///
/// An index at or beyond the board width gives the empty string. Rows too
/// short to reach the column contribute nothing.
///
/// ```
/// use fd_wordsearch::{Board, make_str_from_column};
/// let board = Board::from_lines(&["ANTT", "XSOB"]);
/// assert_eq!(make_str_from_column(&board, 1), "NS");
/// ```
pub fn make_str_from_column(board: &Board, column_index: usize) -> String {
    if column_index >= board.width() {
        return String::new();
    }
    board.rows().iter()
        .filter_map(|row| row.get(column_index))
        .collect()
}
