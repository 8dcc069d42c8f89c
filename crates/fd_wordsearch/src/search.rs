//! Looking up words on a board and in word lists.

use log::trace;

use crate::Board;
use crate::make_str_from_row;
use crate::make_str_from_column;

/// True iff `word` is an element of `wordlist` (exact, case-sensitive).
pub fn is_valid_word<S: AsRef<str>>(wordlist: &[S], word: &str) -> bool {
    wordlist.iter().any(|w| AsRef::<str>::as_ref(w) == word)
}

/// True iff one or more rows of the board contain `word`.
pub fn board_contains_word_in_row(board: &Board, word: &str) -> bool {
    (0..board.num_rows()).any(|r| make_str_from_row(board, r).contains(word))
}

/// True iff one or more columns of the board contain `word`.
pub fn board_contains_word_in_column(board: &Board, word: &str) -> bool {
    (0..board.width()).any(|c| make_str_from_column(board, c).contains(word))
}

/// True iff `word` appears in a row or in a column of the board.
///
/// ```
/// use fd_wordsearch::{Board, board_contains_word};
/// let board = Board::from_lines(&["ANTT", "XSOB"]);
/// assert!(board_contains_word(&board, "ANT"));
/// assert!(board_contains_word(&board, "TO"));
/// ```
pub fn board_contains_word(board: &Board, word: &str) -> bool {
    let found = board_contains_word_in_row(board, word)
        || board_contains_word_in_column(board, word);
    trace!("{word}: {}", if found { "found" } else { "not found" });
    found
}

/// Number of entries in `words` that appear on the board.
///
/// Duplicates are counted once per occurrence in `words`.
pub fn num_words_on_board<S: AsRef<str>>(board: &Board, words: &[S]) -> usize {
    words.iter()
        .filter(|w| board_contains_word(board, AsRef::<str>::as_ref(*w)))
        .count()
}
