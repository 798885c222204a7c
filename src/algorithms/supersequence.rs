//! Reconstruction from supersequence traces.
//!
//! State is `(n, t, U)` with `t = height(U) - n` insertions still owed. Each
//! iteration identifies the first symbol `x1` of the remaining string, then
//! uses the bound oracle to find how many leading insertions `j` can be
//! skipped in the kept traces, and conditions `U` on `x1` first appearing at
//! offset `j + 1`. One symbol of `x` is fixed per iteration.

use crate::bounds::{supersequence_quota, supersequence_threshold};
use crate::error::{Error, Result};
use crate::steps::{Reconstruction, StepRecord};
use crate::traits::{Symbol, TraceCollection};

use super::quota_len;

/// `m[i]` = number of traces whose first `value` sits at offset `i + 1`,
/// for `i` in `0..=t`.
pub fn offset_counts<C: TraceCollection>(traces: &C, value: Symbol, t: usize) -> Vec<usize> {
    (1..=t + 1)
        .map(|position| traces.count_after_skipping(value, position))
        .collect()
}

/// Decide the first symbol of the remaining string.
///
/// A symbol is a candidate when every kept trace has its first occurrence
/// within the first `t + 1` offsets. With two candidates the majority order
/// of first occurrences decides; an exact tie is reported as
/// [`Error::AmbiguousState`].
pub fn first_symbol<C: TraceCollection>(
    traces: &C,
    n: usize,
    t: usize,
) -> Result<(Symbol, Vec<usize>)> {
    let size = traces.size();
    let mut candidates: Vec<(Symbol, Vec<usize>)> = (0..2)
        .map(|value| (value, offset_counts(traces, value, t)))
        .filter(|(_, m)| m.iter().sum::<usize>() == size)
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(n, t, ?candidates, "first symbol candidates");

    match candidates.len() {
        0 => Err(Error::ambiguous(n, t, "no candidate first symbol")),
        1 => Ok(candidates.remove(0)),
        _ => {
            let (zero_first, one_first) = traces.first_occurrence_order();
            if zero_first > one_first {
                Ok(candidates.remove(0))
            } else if one_first > zero_first {
                Ok(candidates.remove(1))
            } else {
                Err(Error::ambiguous(n, t, "first-occurrence order is tied"))
            }
        }
    }
}

/// Recover the length-`n` binary string whose supersequences are `traces`.
///
/// Requires `n >= 1` and `traces.height() >= n`. The first
/// `max_common_supersequences(n, t) + 1` traces are used.
pub fn reconstruct_from_supersequences<C: TraceCollection>(
    n: usize,
    traces: &C,
) -> Result<Reconstruction> {
    let q = traces.alphabet_size();
    if q != 2 {
        return Err(Error::UnsupportedAlphabet { q });
    }
    let height = traces.height();
    if n == 0 || height < n {
        return Err(Error::malformed(format!(
            "supersequence traces of length {height} cannot come from a string of length {n}"
        )));
    }

    let original_n = n;
    let mut n = n;
    let mut t = height - n;

    let required = supersequence_quota(n, t);
    if (traces.size() as u128) < required {
        return Err(Error::InsufficientTraces {
            required,
            supplied: traces.size(),
        });
    }

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("reconstruct_from_supersequences", n, t);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut current = traces.keep_top(quota_len(required));
    let mut symbols = Vec::with_capacity(original_n);
    let mut steps = Vec::new();
    let mut exhausted = false;

    while t >= 1 {
        let (x1, m) = first_symbol(&current, n, t)?;
        symbols.push(x1);

        if n == 1 {
            steps.push(StepRecord {
                n,
                t,
                threshold: None,
                emitted: vec![x1],
                remaining: 0,
            });
            exhausted = true;
            break;
        }

        let j = supersequence_threshold(n, t, &m)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(n, t, threshold = j, symbol = x1, ?m, "supersequence step");

        let next_n = n - 1;
        let next_t = t - j;
        let quota = supersequence_quota(next_n, next_t);
        current = current.skip_to(x1, j + 1).keep_top(quota_len(quota));

        steps.push(StepRecord {
            n,
            t,
            threshold: Some(j),
            emitted: vec![x1],
            remaining: current.size(),
        });
        n = next_n;
        t = next_t;
    }

    if !exhausted {
        symbols.extend(current.unique_member()?);
    }
    debug_assert_eq!(symbols.len(), original_n);

    Ok(Reconstruction { symbols, steps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{RankedTrie, TraceMatrix};
    use assert_matches::assert_matches;

    const TRACES: [[Symbol; 3]; 4] = [[0, 0, 1], [0, 1, 0], [0, 1, 1], [1, 0, 1]];

    #[test]
    fn offset_counts_cover_insertion_window() {
        let m = TraceMatrix::new(&TRACES[..3]).unwrap();
        assert_eq!(offset_counts(&m, 0, 1), vec![3, 0]);
        assert_eq!(offset_counts(&m, 1, 1), vec![0, 2]);
        assert_eq!(offset_counts(&m, 1, 2), vec![0, 2, 1]);
    }

    #[test]
    fn single_candidate_wins() {
        let m = TraceMatrix::new(&TRACES[..3]).unwrap();
        let (x1, m_vec) = first_symbol(&m, 2, 1).unwrap();
        assert_eq!(x1, 0);
        assert_eq!(m_vec, vec![3, 0]);
    }

    #[test]
    fn tie_break_follows_majority_order() {
        // both symbols occur within the first two offsets of every trace
        let m = TraceMatrix::new(&[[0u8, 1, 1], [0, 1, 0], [1, 0, 0]]).unwrap();
        let (x1, _) = first_symbol(&m, 2, 1).unwrap();
        assert_eq!(x1, 0);
        let trie = RankedTrie::from_traces(&[[1u8, 0, 1], [1, 0, 0], [0, 1, 0]]).unwrap();
        let (x1, _) = first_symbol(&trie, 2, 1).unwrap();
        assert_eq!(x1, 1);
    }

    #[test]
    fn exact_tie_is_ambiguous() {
        let m = TraceMatrix::new(&[[0u8, 1, 1], [1, 0, 0]]).unwrap();
        assert_matches!(
            first_symbol(&m, 2, 1),
            Err(Error::AmbiguousState { n: 2, t: 1, .. })
        );
    }

    #[test]
    fn matrix_and_trie_agree_on_short_string() {
        let expected = vec![
            StepRecord {
                n: 2,
                t: 1,
                threshold: Some(0),
                emitted: vec![0],
                remaining: 3,
            },
            StepRecord {
                n: 1,
                t: 1,
                threshold: None,
                emitted: vec![1],
                remaining: 0,
            },
        ];
        let m = TraceMatrix::new(&TRACES).unwrap();
        let r = reconstruct_from_supersequences(2, &m).unwrap();
        assert_eq!(r.symbols, vec![0, 1]);
        assert_eq!(r.steps, expected);

        let trie = RankedTrie::from_traces(&TRACES).unwrap();
        let r = reconstruct_from_supersequences(2, &trie).unwrap();
        assert_eq!(r.symbols, vec![0, 1]);
        assert_eq!(r.steps, expected);
    }

    #[test]
    fn zero_insertions_returns_first_trace() {
        let m = TraceMatrix::new(&[[1u8, 1, 0]]).unwrap();
        let r = reconstruct_from_supersequences(3, &m).unwrap();
        assert_eq!(r.symbols, vec![1, 1, 0]);
        assert!(r.steps.is_empty());
    }

    #[test]
    fn rejects_bad_shapes() {
        let m = TraceMatrix::new(&[[1u8, 0]]).unwrap();
        assert_matches!(
            reconstruct_from_supersequences(3, &m),
            Err(Error::MalformedInput(_))
        );
        assert_matches!(
            reconstruct_from_supersequences(0, &m),
            Err(Error::MalformedInput(_))
        );
        let ternary = TraceMatrix::with_alphabet(&[[2u8, 0, 1]], 3).unwrap();
        assert_matches!(
            reconstruct_from_supersequences(2, &ternary),
            Err(Error::UnsupportedAlphabet { q: 3 })
        );
    }

    #[test]
    fn one_trace_is_not_enough() {
        let m = TraceMatrix::new(&[[0u8, 0, 1]]).unwrap();
        assert_matches!(
            reconstruct_from_supersequences(2, &m),
            Err(Error::InsufficientTraces {
                required: 3,
                supplied: 1
            })
        );
    }
}
