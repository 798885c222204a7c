//! The two reconstruction algorithms.
//!
//! Both are generic over [`TraceCollection`](crate::traits::TraceCollection)
//! and never touch the storage directly:
//! - [`subsequence`]   : peels a run of forced symbols per iteration.
//! - [`supersequence`] : fixes one symbol per iteration and skips a variable
//!   number of leading insertions.

pub mod subsequence;
pub mod supersequence;

pub use subsequence::reconstruct_from_subsequences;
pub use supersequence::reconstruct_from_supersequences;

/// Clamp a saturating `u128` quota to a collection length.
#[inline]
pub(crate) fn quota_len(quota: u128) -> usize {
    usize::try_from(quota).unwrap_or(usize::MAX)
}
