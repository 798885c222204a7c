//! Per-iteration records produced by the reconstructors.
//!
//! Each [`StepRecord`] captures the state a step started from and what it
//! decided, so two runs over the same input can be compared step by step.

use crate::traits::Symbol;

/// One iteration of a reconstruction loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// Symbols of `x` still unknown when the step started.
    pub n: usize,
    /// Deletions (or insertions) still owed when the step started.
    pub t: usize,
    /// Threshold index chosen by the bound oracle; `None` when the step
    /// emitted the last symbol without consulting it.
    pub threshold: Option<usize>,
    /// Symbols appended to the reconstruction by this step.
    pub emitted: Vec<Symbol>,
    /// Traces kept for the next step.
    pub remaining: usize,
}

/// Result of a reconstruction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    /// The recovered string.
    pub symbols: Vec<Symbol>,
    /// Iterations in execution order; empty when no uncertainty was left.
    pub steps: Vec<StepRecord>,
}

impl Reconstruction {
    /// Number of loop iterations the run took.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.steps.len()
    }

    /// Length of the recovered string.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if nothing was recovered (only for `n = 0`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
