//! Combinatorial bounds that decide how much of `x` can be fixed per step.
//!
//! Every function here is a pure function of small integers and is memoized
//! with a process-lifetime cache: the reconstructors request the same
//! `(n, t)` pairs over and over, across iterations and across runs.
//!
//! Values are `u128` and saturate instead of overflowing. A saturated bound
//! simply means no realistic trace count can exceed it.
//!
//! Arguments are signed because the recursions and the threshold searches
//! step below zero (`n - i - 1`, `t - i`), where the bounds are defined to
//! be zero.

use cached::proc_macro::cached;

use crate::error::{Error, Result};
use crate::utils::binomial;

/// Maximum size of a deletion ball: the largest number of distinct strings
/// obtainable by deleting `t` symbols from a length-`n` string over a
/// `q`-letter alphabet.
///
/// Recursion peels one alphabet letter per level:
/// `D(n, t, q) = Σ_{i=0}^{t} C(n−t, i) · D(t, t−i, q−1)`.
#[cached]
pub fn max_deletion_ball_size(n: i64, t: i64, q: i64) -> u128 {
    if n < t || t < 0 {
        return 0;
    }
    if q == 1 {
        return 1;
    }
    let mut size: u128 = 0;
    for i in 0..=t {
        let term = binomial(n - t, i).saturating_mul(max_deletion_ball_size(t, t - i, q - 1));
        size = size.saturating_add(term);
    }
    size
}

/// Maximum number of length-`n − t` strings that are common subsequences of
/// two distinct length-`n` strings.
#[cached]
pub fn max_common_subsequences(n: i64, t: i64, q: i64) -> u128 {
    if n <= t || t <= 0 {
        return 0;
    }
    max_deletion_ball_size(n, t, q)
        .saturating_add(max_deletion_ball_size(n - 2, t - 1, q))
        .saturating_sub(max_deletion_ball_size(n - 1, t, q))
}

/// Maximum size of an insertion ball: `Σ_{i=0}^{t} C(n+t, i) · (q−1)^i`.
#[cached]
pub fn max_insertion_ball_size(n: i64, t: i64, q: i64) -> u128 {
    if n < 0 || t < 0 {
        return 0;
    }
    let base = (q - 1).max(0) as u128;
    let mut size: u128 = 0;
    let mut power: u128 = 1;
    for i in 0..=t {
        size = size.saturating_add(binomial(n + t, i).saturating_mul(power));
        power = power.saturating_mul(base);
    }
    size
}

/// Maximum number of length-`n + t` binary strings that are common
/// supersequences of two distinct length-`n` binary strings.
#[cached]
pub fn max_common_supersequences(n: i64, t: i64) -> u128 {
    if t <= 0 {
        return 0;
    }
    let mut sum: u128 = 0;
    for i in 1..=t {
        sum = sum.saturating_add(max_insertion_ball_size(n, t - i, 2));
    }
    sum.saturating_mul(2)
}

/// Number of traces the subsequence path keeps at state `(n, t)`.
pub fn subsequence_quota(n: usize, t: usize, q: usize) -> u128 {
    max_common_subsequences(n as i64, t as i64, q as i64).saturating_add(1)
}

/// Number of traces the supersequence path keeps at state `(n, t)`.
pub fn supersequence_quota(n: usize, t: usize) -> u128 {
    max_common_supersequences(n as i64, t as i64).saturating_add(1)
}

/// Smallest `i < q` with `ordered_counts[i] > max_common_subsequences(n−i−1, t−i, q)`.
///
/// `ordered_counts` must be the composition counts sorted in descending
/// order. The returned `i` means the first `i + 1` ranked symbols are forced.
pub fn subsequence_threshold(
    n: usize,
    t: usize,
    ordered_counts: &[usize],
    q: usize,
) -> Result<usize> {
    let (n_s, t_s, q_s) = (n as i64, t as i64, q as i64);
    ordered_counts
        .iter()
        .take(q)
        .enumerate()
        .find(|&(i, &w)| {
            let i = i as i64;
            w as u128 > max_common_subsequences(n_s - i - 1, t_s - i, q_s)
        })
        .map(|(i, _)| i)
        .ok_or_else(|| Error::ambiguous(n, t, "no subsequence threshold index"))
}

/// Smallest `i` in `0..=t` with `m_vector[i] > max_common_supersequences(n−1, t−i)`.
///
/// The returned `i` is the number of leading insertions skipped before the
/// first symbol of `x` in the kept traces.
pub fn supersequence_threshold(n: usize, t: usize, m_vector: &[usize]) -> Result<usize> {
    let (n_s, t_s) = (n as i64, t as i64);
    m_vector
        .iter()
        .take(t + 1)
        .enumerate()
        .find(|&(i, &w)| w as u128 > max_common_supersequences(n_s - 1, t_s - i as i64))
        .map(|(i, _)| i)
        .ok_or_else(|| Error::ambiguous(n, t, "no supersequence threshold index"))
}
