//! Game error kinds
//!
//! Only fatal conditions are errors. Rejected guesses are ordinary
//! [`Outcome`](crate::game::Outcome) values and a closed input stream ends the
//! round like a quit.

use std::fmt;

/// Fatal errors raised while setting up a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Unrecognized command-line value (language token, master word)
    BadArgument(String),
    /// The dictionary holds no five-letter word to use as master
    EmptyPool,
    /// Reserving storage for the dictionary or target set failed
    OutOfMemory,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadArgument(detail) => write!(f, "bad argument: {detail}"),
            Self::EmptyPool => write!(f, "empty pool: dictionary has no five-letter word"),
            Self::OutOfMemory => write!(f, "out of memory: failed to allocate word storage"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<std::collections::TryReserveError> for GameError {
    fn from(_: std::collections::TryReserveError) -> Self {
        Self::OutOfMemory
    }
}
