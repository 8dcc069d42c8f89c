use std::fmt;
use std::error;

/// Error type for operations that require valid nucleotides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// A character outside of {A, T, C, G}.
    InvalidNucleotide(char),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNucleotide(c) => write!(f, "Invalid nucleotide: '{c}'"),
        }
    }
}

impl error::Error for SequenceError {}
