//! Operations over DNA sequences given as plain strings.
//!
//! Sequences are never modified in place, every operation returns a new
//! value. Lengths and indices count characters, not bytes.
//!

use log::debug;
use log::trace;

use crate::Nucleotide;
use crate::SequenceError;

/// Return the length of the DNA sequence.
///
/// ```
/// assert_eq!(fd_dna::get_length("ATCGAT"), 6);
/// ```
pub fn get_length(seq: &str) -> usize {
    seq.chars().count()
}

/// True iff `a` is strictly longer than `b`.
pub fn is_longer(a: &str, b: &str) -> bool {
    get_length(a) > get_length(b)
}

/// Number of positions in `seq` equal to `base`.
pub fn count_nucleotides(seq: &str, base: char) -> usize {
    seq.chars().filter(|&c| c == base).count()
}

/// True iff `sub` occurs as a contiguous substring of `seq`.
pub fn contains_sequence(seq: &str, sub: &str) -> bool {
    seq.contains(sub)
}

/// True iff the sequence contains no characters other than A, T, C and G.
/// The empty sequence is valid.
pub fn is_valid_sequence(seq: &str) -> bool {
    seq.chars().all(|c| Nucleotide::from_char(c).is_some())
}

/// Return `seq` with `insert` spliced in right before position `index`.
///
/// An `index` past the end of `seq` is clamped, so the insert is appended.
///
/// ```
/// assert_eq!(fd_dna::insert_sequence("CCGG", "AT", 2), "CCATGG");
/// ```
pub fn insert_sequence(seq: &str, insert: &str, index: usize) -> String {
    let split = match seq.char_indices().nth(index) {
        Some((offset, _)) => offset,
        None => {
            if index > get_length(seq) {
                debug!("Insert index {index} beyond sequence of length {}, appending.", get_length(seq));
            }
            seq.len()
        }
    };
    let mut result = String::with_capacity(seq.len() + insert.len());
    result.push_str(&seq[..split]);
    result.push_str(insert);
    result.push_str(&seq[split..]);
    result
}

/// Return the complement of a single base.
///
/// ```
/// use fd_dna::{get_complement, SequenceError};
/// assert_eq!(get_complement('A'), Ok('T'));
/// assert_eq!(get_complement('Z'), Err(SequenceError::InvalidNucleotide('Z')));
/// ```
pub fn get_complement(base: char) -> Result<char, SequenceError> {
    Nucleotide::try_from(base).map(|n| n.complement().into())
}

/// Return the sequence complementary to `seq`, position by position.
///
/// Fails on the first character outside of {A, T, C, G}.
pub fn get_complementary_sequence(seq: &str) -> Result<String, SequenceError> {
    let complement = seq.chars()
        .map(get_complement)
        .collect::<Result<String, _>>();
    if let Err(ref e) = complement {
        trace!("No complement for {seq}: {e}");
    }
    complement
}
