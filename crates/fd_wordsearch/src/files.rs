//! Line based board and word-list files.
//!
//! A word-list file holds one word per line. A board file holds one row
//! per line, each character of a line being one cell. Opening and closing
//! files is left to the caller: everything here works on `BufRead` and
//! `Write` handles.
//!
//! Readers strip both `\n` and `\r\n` line endings, so a word or row that
//! itself ends in `\r` does not survive a write/read round trip.
//!

use std::io::BufRead;
use std::io::Write;

use log::debug;

use crate::Board;
use crate::BoardError;

/// Return all words (with line endings removed) from an open reader.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>, BoardError> {
    let words = reader.lines().collect::<Result<Vec<_>, _>>()?;
    debug!("Read {} words.", words.len());
    Ok(words)
}

/// Return a board read from an open reader, one row per line.
pub fn read_board<R: BufRead>(reader: R) -> Result<Board, BoardError> {
    let rows = reader.lines()
        .map(|line| line.map(|l| l.chars().collect::<Vec<char>>()))
        .collect::<Result<Vec<_>, _>>()?;
    let board = Board::from(rows);
    debug!("Read board with {} rows, width {}.", board.num_rows(), board.width());
    Ok(board)
}

/// Write words to `writer`, one per line.
pub fn write_words<W: Write, S: AsRef<str>>(mut writer: W, words: &[S]) -> Result<(), BoardError> {
    for word in words {
        writeln!(writer, "{}", AsRef::<str>::as_ref(word))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a board to `writer`, one row per line.
pub fn write_board<W: Write>(mut writer: W, board: &Board) -> Result<(), BoardError> {
    write!(writer, "{board}")?;
    writer.flush()?;
    Ok(())
}
