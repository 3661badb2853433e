//! # Combinations Table
//!
//! The 21 size-5 subsets of `{0,1,2,3,4,5,6}`, used by both the 7-card
//! evaluator and the short-circuit comparator to enumerate every 5-card
//! slice of a 7-card hand. Built once behind [`once_cell::sync::Lazy`] and
//! shared read-only across worker threads, in the same spirit as the
//! teacher crate's lazily-initialized lookup singletons.

use once_cell::sync::Lazy;

/// `COMBINATIONS[i]` is one of the 21 size-5 subsets of `0..7`, given as
/// ascending indices into a 7-card array.
pub static COMBINATIONS: Lazy<[[usize; 5]; 21]> = Lazy::new(build_combinations);

fn build_combinations() -> [[usize; 5]; 21] {
    let mut combos = [[0usize; 5]; 21];
    let mut slot = 0;
    for a in 0..7 {
        for b in (a + 1)..7 {
            for c in (b + 1)..7 {
                for d in (c + 1)..7 {
                    for e in (d + 1)..7 {
                        combos[slot] = [a, b, c, d, e];
                        slot += 1;
                    }
                }
            }
        }
    }
    debug_assert_eq!(slot, 21);
    combos
}
