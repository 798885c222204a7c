//! Trace generators shared by the integration tests.
#![allow(dead_code)]

use std::collections::BTreeSet;

/// Every distinct subsequence of `x` with exactly `t` deletions, sorted.
pub fn subsequences(x: &[u8], t: usize) -> Vec<Vec<u8>> {
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

/// Every distinct binary supersequence of `x` with exactly `t` insertions,
/// sorted.
pub fn supersequences(x: &[u8], t: usize) -> Vec<Vec<u8>> {
    let mut level = BTreeSet::from([x.to_vec()]);
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

/// All `q`-ary strings of length `n`, in lexicographic order.
pub fn strings(n: usize, q: u8) -> Vec<Vec<u8>> {
    let mut out = vec![Vec::new()];
    for _ in 0..n {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                (0..q).map(move |s| {
                    let mut v = prefix.clone();
                    v.push(s);
                    v
                })
            })
            .collect();
    }
    out
}
