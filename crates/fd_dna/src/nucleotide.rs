use std::fmt;

use crate::SequenceError;

/// A single DNA base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// Return the base-pairing partner (A <-> T, C <-> G).
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    /// Convert from an uppercase character, `None` for anything else.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'C' => Some(Self::C),
            'G' => Some(Self::G),
            'T' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to the uppercase character for this base.
    pub const fn to_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
        }
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = SequenceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(SequenceError::InvalidNucleotide(c))
    }
}

impl From<Nucleotide> for char {
    fn from(nuc: Nucleotide) -> char {
        nuc.to_char()
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement_pairs() {
        assert_eq!(Nucleotide::A.complement(), Nucleotide::T);
        assert_eq!(Nucleotide::T.complement(), Nucleotide::A);
        assert_eq!(Nucleotide::C.complement(), Nucleotide::G);
        assert_eq!(Nucleotide::G.complement(), Nucleotide::C);
    }

    #[test]
    fn test_try_from_char() {
        assert_eq!(Nucleotide::try_from('G'), Ok(Nucleotide::G));
        assert_eq!(Nucleotide::try_from('g'), Err(SequenceError::InvalidNucleotide('g')));
        assert_eq!(Nucleotide::try_from('X'), Err(SequenceError::InvalidNucleotide('X')));
    }

    #[test]
    fn test_char_roundtrip() {
        for c in crate::DNA_ALPHABET {
            let nuc = Nucleotide::try_from(c).unwrap();
            assert_eq!(char::from(nuc), c);
            assert_eq!(format!("{nuc}"), c.to_string());
        }
    }
}
