//! The fd_wordsearch crate.
//!
//! Utilities for a word-search game played on a grid of single characters:
//!  - Boards, with row and column string extraction.
//!  - Word lookup along rows and columns.
//!  - Length based word scores and player score keeping.
//!  - Line based readers (and writers) for board and word-list files.
//!
//! A board
//! ```text
//! ANTT
//! XSOB
//! ```
//! is represented as the rows `[['A', 'N', 'T', 'T'], ['X', 'S', 'O', 'B']]`.
//!

mod error;
mod board;
mod search;
mod score;
mod files;

pub use error::*;
pub use board::*;
pub use search::*;
pub use score::*;
pub use files::*;
