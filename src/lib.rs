//! Exact trace reconstruction
//!
//! This crate recovers an unknown string `x` of length `n` from a multiset of
//! its traces, where every trace is either a subsequence of `x` (symbols
//! deleted) or a supersequence of `x` (symbols inserted). Given more traces
//! than a combinatorial threshold, the answer is exact and deterministic:
//! symbols are fixed by counting arguments, not by alignment heuristics.
//!
//! ## Core idea
//! 1. The [`bounds`] module computes, for a remaining length `n` and `t`
//!    outstanding edits, how many common sub/supersequences two distinct
//!    strings can share.
//! 2. A reconstructor repeatedly ranks candidate next symbols, and whenever a
//!    count beats the bound the symbol is forced.
//! 3. The traces are conditioned on that symbol and trimmed back to the
//!    bound, and the loop continues until no uncertainty is left.
//!
//! ## Quick start
//! ```
//! use trace_recon::{collections::RankedTrie, TraceEngine};
//!
//! // subsequences of length 2 of x = 101
//! let traces = [[1u8, 0], [1, 0], [1, 1], [0, 1]];
//! let trie = RankedTrie::from_traces(&traces).unwrap();
//! let result = TraceEngine::new(3, trie).run().unwrap();
//! assert_eq!(result.symbols, vec![1, 0, 1]);
//! ```
//!
//! ## Trace collections
//! The reconstructors only talk to the [`TraceCollection`] trait. Two
//! realizations ship with the crate:
//! - [`collections::TraceMatrix`]: a dense `ndarray` matrix, one column per
//!   trace, keeping duplicates; supports q-ary subsequence traces.
//! - [`collections::RankedTrie`]: a persistent binary trie whose derived
//!   snapshots share structure with the original.
//!
//! Enable the `tracing` feature to get spans and per-step events.

pub mod algorithms;
pub mod bounds;
pub mod builder;
pub mod collections;
pub mod engine;
pub mod error;
pub mod input;
pub mod steps;
pub mod traits;
pub mod utils;

pub use crate::builder::TraceEngineBuilder;
pub use crate::engine::{ReconstructionPath, TraceEngine};
pub use crate::error::{Error, Result};
pub use crate::steps::{Reconstruction, StepRecord};
pub use crate::traits::{Symbol, TraceCollection};
