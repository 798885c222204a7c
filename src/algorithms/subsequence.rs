//! Reconstruction from subsequence traces.
//!
//! State is `(n, t, U)`: `n` symbols of `x` still unknown, `t = n - height(U)`
//! deletions still owed, and `U` the kept traces. Each iteration ranks the
//! symbols by how many traces start with them and asks the bound oracle how
//! many of the top-ranked symbols are forced. Those are appended as a run,
//! and `U` is conditioned on the last forced symbol being the first symbol
//! of every kept trace.
//!
//! Once `t` reaches 0 the single remaining trace is the rest of `x`.

use crate::bounds::{subsequence_quota, subsequence_threshold};
use crate::error::{Error, Result};
use crate::steps::{Reconstruction, StepRecord};
use crate::traits::{Symbol, TraceCollection};

use super::quota_len;

/// Composition of the first position: how many traces start with each
/// symbol, plus the symbols ranked by that count.
///
/// The ranking is a stable descending sort, so equal counts keep the
/// smaller symbol first.
pub fn ranked_first_symbols<C: TraceCollection>(traces: &C, q: usize) -> (Vec<Symbol>, Vec<usize>) {
    let counts: Vec<usize> = (0..q)
        .map(|a| traces.count_after_skipping(a as Symbol, 1))
        .collect();
    let mut order: Vec<Symbol> = (0..q).map(|a| a as Symbol).collect();
    order.sort_by(|&a, &b| counts[b as usize].cmp(&counts[a as usize]));
    let ranked = order.iter().map(|&a| counts[a as usize]).collect();
    (order, ranked)
}

/// Recover the length-`n` string whose subsequences are `traces`.
///
/// Requires `traces.height() <= n`. The first
/// `max_common_subsequences(n, t, q) + 1` traces (by the collection's own
/// priority) are used; fewer than that fails with
/// [`Error::InsufficientTraces`].
pub fn reconstruct_from_subsequences<C: TraceCollection>(
    n: usize,
    traces: &C,
) -> Result<Reconstruction> {
    let q = traces.alphabet_size();
    if q < 2 {
        return Err(Error::UnsupportedAlphabet { q });
    }
    let height = traces.height();
    if height > n {
        return Err(Error::malformed(format!(
            "subsequence traces of length {height} cannot come from a string of length {n}"
        )));
    }

    let original_n = n;
    let mut n = n;
    let mut t = n - height;

    let required = subsequence_quota(n, t, q);
    if (traces.size() as u128) < required {
        return Err(Error::InsufficientTraces {
            required,
            supplied: traces.size(),
        });
    }

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("reconstruct_from_subsequences", n, t, q);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut current = traces.keep_top(quota_len(required));
    let mut symbols = Vec::with_capacity(original_n);
    let mut steps = Vec::new();

    while t >= 1 {
        let (order, ranked) = ranked_first_symbols(&current, q);
        let j = subsequence_threshold(n, t, &ranked, q)?;
        let forced = &order[..=j];

        let (next_n, next_t) = match (n.checked_sub(j + 1), t.checked_sub(j)) {
            (Some(next_n), Some(next_t)) => (next_n, next_t),
            _ => return Err(Error::ambiguous(n, t, "threshold exceeds remaining length")),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(n, t, threshold = j, ?forced, ?ranked, "subsequence step");

        symbols.extend_from_slice(forced);
        let quota = subsequence_quota(next_n, next_t, q);
        current = current.skip_to(order[j], 1).keep_top(quota_len(quota));

        steps.push(StepRecord {
            n,
            t,
            threshold: Some(j),
            emitted: forced.to_vec(),
            remaining: current.size(),
        });
        n = next_n;
        t = next_t;
    }

    symbols.extend(current.unique_member()?);
    debug_assert_eq!(symbols.len(), original_n);

    Ok(Reconstruction { symbols, steps })
}
