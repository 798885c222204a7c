#![cfg(feature = "heavy")]
mod common;

use common::subsequences;
use rand::{rngs::StdRng, Rng, SeedableRng};
use trace_recon::{
    bounds::subsequence_quota,
    collections::{RankedTrie, TraceMatrix},
    TraceEngine,
};

fn random_bits(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(0..2u8)).collect()
}

#[test]
fn heavy_stress_long_strings() {
    let mut rng = StdRng::seed_from_u64(123);
    for (n, t) in [(64, 2), (96, 2), (40, 3)] {
        let quota = subsequence_quota(n, t, 2);
        let mut recovered = 0;
        for _ in 0..50 {
            if recovered == 5 {
                break;
            }
            let x = random_bits(&mut rng, n);
            let traces = subsequences(&x, t);
            // strings with few runs have a deletion ball below the quota
            if (traces.len() as u128) < quota {
                continue;
            }
            let trie = RankedTrie::from_traces(&traces).unwrap();
            let matrix = TraceMatrix::new(&traces).unwrap();
            assert_eq!(TraceEngine::new(n, trie).run().unwrap().symbols, x);
            assert_eq!(TraceEngine::new(n, matrix).run().unwrap().symbols, x);
            recovered += 1;
        }
        assert_eq!(recovered, 5, "too few strings above the quota for n={n}, t={t}");
    }
}
