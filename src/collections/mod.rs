//! The two realizations of [`TraceCollection`](crate::traits::TraceCollection).
//!
//! - [`matrix`] : dense columns in an `ndarray` array; keeps duplicates and
//!   insertion order, supports q-ary symbols.
//! - [`trie`]   : persistent binary trie with structural sharing; keeps only
//!   distinct traces.
//!
//! Both answer the same queries, so either can back either reconstructor.

pub mod matrix;
pub mod trie;

pub use matrix::TraceMatrix;
pub use trie::{RankedTrie, RankedTrieBuilder};
