//! Example: recover a string from its supersequences.
//!
//! Run with:
//! `cargo run --example supersequences`

use std::collections::BTreeSet;

use trace_recon::{
    collections::{RankedTrie, TraceMatrix},
    TraceEngine,
};

fn main() {
    let x: Vec<u8> = vec![0, 1, 1, 0, 1];
    let t = 2;
    let traces = supersequences(&x, t);
    println!("x = {x:?}, {} distinct supersequences with {t} insertions", traces.len());

    let trie = RankedTrie::from_traces(&traces).expect("traces are binary");
    let result = TraceEngine::new(x.len(), trie)
        .run()
        .expect("enough traces for the trie path");
    println!("trie:   {:?}", result.symbols);

    let matrix = TraceMatrix::new(&traces).expect("traces share one length");
    let result = TraceEngine::new(x.len(), matrix)
        .run()
        .expect("enough traces for the matrix path");
    println!("matrix: {:?}", result.symbols);
}

/// Every distinct supersequence obtained by inserting exactly `t` symbols.
fn supersequences(x: &[u8], t: usize) -> Vec<Vec<u8>> {
    let mut level: BTreeSet<Vec<u8>> = BTreeSet::from([x.to_vec()]);
    for _ in 0..t {
        let mut next = BTreeSet::new();
        for s in &level {
            for pos in 0..=s.len() {
                for symbol in [0u8, 1] {
                    let mut grown = s.clone();
                    grown.insert(pos, symbol);
                    next.insert(grown);
                }
            }
        }
        level = next;
    }
    level.into_iter().collect()
}
