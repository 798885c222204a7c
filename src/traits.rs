//! Core trait definitions for trace collections.
//!
//! The reconstructors never look at how traces are stored. They only need a
//! handful of counting and conditioning queries, captured by
//! [`TraceCollection`]:
//! - Shape: how many traces, and their common length.
//! - Conditioning: "traces whose first `a` sits at offset `i`", either as a
//!   count or as the collection of the suffixes after that offset.
//! - Restriction: keep a deterministic subset of exactly `N` traces.
//! - Extraction: read back the one trace left at the end.
//!
//! Every operation is non-destructive. Derived collections are new values and
//! earlier snapshots stay valid, which both realizations guarantee in their
//! own way (re-slicing for the matrix, structural sharing for the trie).

use crate::error::Result;

/// A single trace symbol.
pub type Symbol = u8;

/// A multiset of equal-length traces.
///
/// Semantics:
/// - `size()` counts members (duplicates included where the realization
///   keeps them).
/// - `height()` is the common trace length; a height-0 collection holds
///   `size()` empty traces.
/// - Positions are 1-based and refer to the first occurrence of a symbol
///   when scanning from the front.
pub trait TraceCollection: Sized {
    /// Number of traces in the collection.
    fn size(&self) -> usize;

    /// Common length of every trace.
    fn height(&self) -> usize;

    /// Number of distinct symbols the collection may contain.
    fn alphabet_size(&self) -> usize;

    /// Collection of suffixes strictly after the first occurrence of `value`,
    /// restricted to the traces where that occurrence is at `position`.
    ///
    /// The result has height `height() - position` (0 when nothing matched
    /// and `position` exceeds the height).
    fn skip_to(&self, value: Symbol, position: usize) -> Self;

    /// Number of traces whose first `value` is at `position`.
    ///
    /// Equivalent to `skip_to(value, position).size()`; realizations override
    /// it when counting is cheaper than materializing.
    fn count_after_skipping(&self, value: Symbol, position: usize) -> usize {
        self.skip_to(value, position).size()
    }

    /// Keep exactly `min(n, size())` traces, chosen by a fixed deterministic
    /// priority.
    fn keep_top(&self, n: usize) -> Self;

    /// The single remaining trace.
    ///
    /// Fails with [`crate::Error::InvalidUniqueExtraction`] unless
    /// `size() == 1`.
    fn unique_member(&self) -> Result<Vec<Symbol>>;

    /// Counts `(zero_first, one_first)` over traces that contain both binary
    /// symbols: how many see their first 0 before their first 1, and how many
    /// see it the other way round.
    fn first_occurrence_order(&self) -> (usize, usize);

    /// Returns true if the collection holds no traces.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
