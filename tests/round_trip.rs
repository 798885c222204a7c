mod common;

use common::{strings, subsequences, supersequences};
use trace_recon::{
    collections::{RankedTrie, TraceMatrix},
    Error, Reconstruction, TraceEngine,
};

/// Returns true when the run succeeded; too few distinct traces is the only
/// acceptable failure.
fn check(x: &[u8], result: Result<Reconstruction, Error>) -> bool {
    match result {
        Ok(r) => {
            assert_eq!(r.symbols, x, "wrong reconstruction");
            true
        }
        Err(Error::InsufficientTraces { .. }) => false,
        Err(err) => panic!("unexpected error for x={x:?}: {err}"),
    }
}

#[test]
fn subsequences_round_trip_exhaustively() {
    let mut recovered = 0;
    for n in 2..=7 {
        for t in 1..=2.min(n - 1) {
            for x in strings(n, 2) {
                let traces = subsequences(&x, t);
                let matrix = TraceMatrix::new(&traces).unwrap();
                let trie = RankedTrie::from_traces(&traces).unwrap();
                let a = check(&x, TraceEngine::new(n, matrix).run());
                let b = check(&x, TraceEngine::new(n, trie).run());
                assert_eq!(a, b, "collections disagree on sufficiency for x={x:?}");
                recovered += usize::from(a);
            }
        }
    }
    assert!(recovered > 100, "only {recovered} strings recovered");
}

#[test]
fn supersequences_round_trip_exhaustively() {
    let mut recovered = 0;
    for n in 1..=6 {
        for t in 1..=2 {
            for x in strings(n, 2) {
                let traces = supersequences(&x, t);
                let matrix = TraceMatrix::new(&traces).unwrap();
                let trie = RankedTrie::from_traces(&traces).unwrap();
                let a = check(&x, TraceEngine::new(n, matrix).run());
                let b = check(&x, TraceEngine::new(n, trie).run());
                assert_eq!(a, b, "collections disagree on sufficiency for x={x:?}");
                recovered += usize::from(a);
            }
        }
    }
    assert!(recovered > 100, "only {recovered} strings recovered");
}

#[test]
fn ternary_subsequences_round_trip_with_matrix() {
    let mut recovered = 0;
    for n in 2..=5 {
        for t in 1..=2.min(n - 1) {
            for x in strings(n, 3) {
                let traces = subsequences(&x, t);
                let matrix = TraceMatrix::with_alphabet(&traces, 3).unwrap();
                recovered += usize::from(check(&x, TraceEngine::new(n, matrix).run()));
            }
        }
    }
    assert!(recovered > 100, "only {recovered} strings recovered");
}

#[test]
fn ternary_example() {
    let x = [2u8, 0, 1, 1, 2, 0];
    let traces = subsequences(&x, 2);
    assert_eq!(traces.len(), 11);
    let matrix = TraceMatrix::with_alphabet(&traces, 3).unwrap();
    let result = TraceEngine::new(6, matrix).run().unwrap();
    assert_eq!(result.symbols, x);
}
