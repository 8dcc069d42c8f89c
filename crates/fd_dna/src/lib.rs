//! The fd_dna crate.
//!
//! Small utilities over DNA sequences written as plain strings:
//!  - length and comparison
//!  - nucleotide counting and substring search
//!  - validity checks against the {A, T, C, G} alphabet
//!  - insertion and base-pair complements
//!

mod error;
mod nucleotide;
mod sequence;

pub use error::*;
pub use nucleotide::*;
pub use sequence::*;

/// The valid DNA alphabet, in the order it is usually written.
pub const DNA_ALPHABET: [char; 4] = ['A', 'T', 'C', 'G'];
