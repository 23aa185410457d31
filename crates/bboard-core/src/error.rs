//! Error types for bboard core values.
//!
//! The transition engine itself is total and never fails; the errors here
//! cover decoding values that arrive from outside the simulation.

use std::error::Error;
use std::fmt;

/// Errors from decoding an agent action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The integer does not name one of the six moves.
    UnknownMove {
        /// The rejected value.
        value: u8,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMove { value } => write!(f, "unknown move {value}, expected 0..=5"),
        }
    }
}

impl Error for MoveError {}
