//! The permutation genome.
//!
//! A permutation is a `Vec<Point>` — the search never introduces a separate
//! wrapper type around it, since every component (population buffer,
//! decoder, operators) treats it as a plain contiguous slice of packed
//! points. This module holds the one cross-cutting concern that doesn't
//! belong to any single component: checking the bijection-on-`E` invariant
//! that section 4.3 says the hot loop never needs to check, but that tests
//! (property 1) very much do.

use crate::coord::Point;
use std::collections::HashSet;

/// Whether `perm` is a bijection on `eligible` — same length, same elements,
/// each exactly once. `O(n)` via a hash set; only used in tests/assertions,
/// never in the generation loop itself.
pub fn is_bijection_on(perm: &[Point], eligible: &[Point]) -> bool {
    if perm.len() != eligible.len() {
        return false;
    }
    let perm_set: HashSet<Point> = perm.iter().copied().collect();
    if perm_set.len() != perm.len() {
        return false; // duplicate within perm
    }
    eligible.iter().all(|p| perm_set.contains(p))
}
