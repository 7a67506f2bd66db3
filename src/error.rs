use crate::Alphabet;
use std::fmt;

/// Errors reported while building a suffix array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `value` at `position` of the input lies outside `alphabet`.
    OutOfRange {
        position: usize,
        value: usize,
        alphabet: Alphabet,
    },
    /// An alphabet window must satisfy `0 < min <= max` and span at most
    /// [`Alphabet::MAX_WIDTH`] characters.
    InvalidAlphabet { min: usize, max: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange {
                position,
                value,
                alphabet,
            } => write!(
                f,
                "character {} at position {} is outside the alphabet [{}, {}]",
                value,
                position,
                alphabet.min(),
                alphabet.max()
            ),
            Error::InvalidAlphabet { min, max } => write!(
                f,
                "invalid alphabet [{}, {}]: expected 0 < min <= max spanning at most {} characters",
                min,
                max,
                Alphabet::MAX_WIDTH
            ),
        }
    }
}

impl std::error::Error for Error {}
