//! Example: recover a string from all of its length-(n - t) subsequences.
//!
//! Run with:
//! `cargo run --example subsequences`

use std::collections::BTreeSet;

use trace_recon::{
    collections::{RankedTrie, TraceMatrix},
    TraceEngine,
};

fn main() {
    let x: Vec<u8> = vec![1, 0, 0, 1, 1, 0, 1, 0];
    let t = 2;
    let traces = subsequences(&x, t);
    println!("x = {x:?}, {} distinct subsequences with {t} deletions", traces.len());

    let matrix = TraceMatrix::new(&traces).expect("traces share one length");
    let from_matrix = TraceEngine::new(x.len(), matrix)
        .run()
        .expect("enough traces for the matrix path");

    let trie = RankedTrie::from_traces(&traces).expect("traces are binary");
    let from_trie = TraceEngine::new(x.len(), trie)
        .run()
        .expect("enough traces for the trie path");

    println!("matrix: {:?} in {} steps", from_matrix.symbols, from_matrix.iterations());
    println!("trie:   {:?} in {} steps", from_trie.symbols, from_trie.iterations());
    for step in &from_trie.steps {
        println!(
            "  n={} t={} threshold={:?} emitted={:?} kept={}",
            step.n, step.t, step.threshold, step.emitted, step.remaining
        );
    }
}

/// Every distinct subsequence obtained by deleting exactly `t` symbols.
fn subsequences(x: &[u8], t: usize) -> Vec<Vec<u8>> {
    let mut level = BTreeSet::from([x.to_vec()]);
    for _ in 0..t {
        let mut next = BTreeSet::new();
        for s in &level {
            for pos in 0..s.len() {
                let mut shrunk = s.clone();
                shrunk.remove(pos);
                next.insert(shrunk);
            }
        }
        level = next;
    }
    level.into_iter().collect()
}
