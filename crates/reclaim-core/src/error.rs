//! Error types for the checked access paths.

use std::error::Error;
use std::fmt;

/// Errors returned by the checked element accessors.
///
/// The default accessors never produce these: they are unchecked or
/// panic on a violated precondition. Callers opt in to `AccessError`
/// by using the `try_*` variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessError {
    /// An index was at or past the end of the sequence.
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// Length of the sequence at the time of the request.
        len: usize,
    },
    /// The operation needs at least one element and the sequence was empty.
    Empty,
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::Empty => write!(f, "sequence is empty"),
        }
    }
}

impl Error for AccessError {}
