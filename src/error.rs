//! Error type shared by the bound oracle, the collections and the
//! reconstructors.
//!
//! None of these are recoverable within a single reconstruction attempt:
//! either enough traces were supplied and the run succeeds, or the caller
//! has to come back with different input.

use std::io;
use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Fewer traces than the initial restriction step needs.
    #[error("not enough traces: need at least {required}, got {supplied}")]
    InsufficientTraces { required: u128, supplied: usize },

    /// Non-binary symbol, ragged trace lengths, or a trace length that does
    /// not fit the requested reconstruction path.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("alphabet of size {q} is not supported by this collection")]
    UnsupportedAlphabet { q: usize },

    /// No index satisfied the threshold condition, or the supersequence
    /// tie-break could not decide. Indicates insufficient traces slipped
    /// through or an internal invariant was broken.
    #[error("ambiguous reconstruction state at n={n}, t={t}: {reason}")]
    AmbiguousState {
        n: usize,
        t: usize,
        reason: &'static str,
    },

    #[error("expected exactly one remaining trace, found {size}")]
    InvalidUniqueExtraction { size: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }

    pub(crate) fn ambiguous(n: usize, t: usize, reason: &'static str) -> Self {
        Self::AmbiguousState { n, t, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_counts() {
        let err = Error::InsufficientTraces {
            required: 4,
            supplied: 1,
        };
        assert_eq!(
            err.to_string(),
            "not enough traces: need at least 4, got 1"
        );

        let err = Error::InvalidUniqueExtraction { size: 3 };
        assert_eq!(
            err.to_string(),
            "expected exactly one remaining trace, found 3"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing.txt");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
