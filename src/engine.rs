//! Reconstruction engine.
//!
//! Picks the algorithm from the shape of the input: traces longer than `n`
//! are supersequences, shorter ones are subsequences, and traces of exactly
//! length `n` carry no edit information at all, so they are rejected.
//!
//! The engine is generic over any [`TraceCollection`], so the same input can
//! be run against either realization.

use std::fmt;

use crate::algorithms::{reconstruct_from_subsequences, reconstruct_from_supersequences};
use crate::error::{Error, Result};
use crate::steps::Reconstruction;
use crate::traits::TraceCollection;

/// Which reconstructor a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconstructionPath {
    Subsequences,
    Supersequences,
}

impl fmt::Display for ReconstructionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subsequences => f.write_str("subsequences"),
            Self::Supersequences => f.write_str("supersequences"),
        }
    }
}

/// Selection rule: compare the common trace length with `n`.
pub fn select_path(n: usize, trace_len: usize) -> Result<ReconstructionPath> {
    match trace_len.cmp(&n) {
        std::cmp::Ordering::Greater => Ok(ReconstructionPath::Supersequences),
        std::cmp::Ordering::Less => Ok(ReconstructionPath::Subsequences),
        std::cmp::Ordering::Equal => Err(Error::malformed(format!(
            "cannot reconstruct from traces of the same length as n={n}"
        ))),
    }
}

/// Reconstruction engine for a given trace collection `C`.
///
/// Typical usage:
/// ```
/// use trace_recon::{collections::RankedTrie, TraceEngine};
///
/// let traces = [[0u8, 0, 1], [0, 1, 0], [0, 1, 1], [1, 0, 1]];
/// let trie = RankedTrie::from_traces(&traces).unwrap();
/// let result = TraceEngine::new(2, trie).run().unwrap();
/// assert_eq!(result.symbols, vec![0, 1]);
/// ```
pub struct TraceEngine<C: TraceCollection> {
    n: usize,
    traces: C,
    expected: Option<ReconstructionPath>,
}

impl<C: TraceCollection> TraceEngine<C> {
    /// Create an engine that picks its path from the trace length.
    pub fn new(n: usize, traces: C) -> Self {
        Self::with_expected_path(n, traces, None)
    }

    /// Create an engine that additionally insists on a particular path.
    pub fn with_expected_path(n: usize, traces: C, expected: Option<ReconstructionPath>) -> Self {
        Self {
            n,
            traces,
            expected,
        }
    }

    /// Length of the string being reconstructed.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Expose the underlying collection.
    pub fn traces(&self) -> &C {
        &self.traces
    }

    /// The path `run` will take.
    ///
    /// Fails when the trace length equals `n`, or when it disagrees with the
    /// path requested at construction.
    pub fn path(&self) -> Result<ReconstructionPath> {
        let path = select_path(self.n, self.traces.height())?;
        match self.expected {
            Some(expected) if expected != path => Err(Error::malformed(format!(
                "traces of length {} describe {path}, but {expected} were expected",
                self.traces.height()
            ))),
            _ => Ok(path),
        }
    }

    /// Run the reconstruction.
    ///
    /// Returns the recovered string together with the per-step records.
    pub fn run(&self) -> Result<Reconstruction> {
        let path = self.path()?;

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "trace_engine_run",
            n = self.n,
            size = self.traces.size(),
            height = self.traces.height(),
            %path
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        match path {
            ReconstructionPath::Subsequences => reconstruct_from_subsequences(self.n, &self.traces),
            ReconstructionPath::Supersequences => {
                reconstruct_from_supersequences(self.n, &self.traces)
            }
        }
    }
}
