//! Crossover, mutation, and the copy+mutate operator, fused with the write
//! into a preallocated child slot so there is no intermediate buffer between
//! "produce a child" and "the child's bytes live in the population."
//!
//! Both child-producing operators in this module end with the same pair of
//! cyclic shifts (section 4.5): one element pushed to the front, one pushed
//! to the back. The front shift nudges the decoder to consider drawing a
//! square there first; the back shift suppresses that point for this child.

use crate::coord::Point;
use crate::rng::Xorshift64;

/// Which side of the crossover line a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Above,
    BelowOrOn,
}

/// An integer line `a*x + b*y + c`, classifying points by the sign of that
/// expression. `a`, `b`, `c` are bounded so the expression cannot overflow
/// `i64` for `x, y < 2^16` (see `DESIGN.md` for the bound derivation).
#[derive(Debug, Clone, Copy)]
pub struct LinePredicate {
    a: i64,
    b: i64,
    c: i64,
}

impl LinePredicate {
    /// Draw a random line with coefficients in `[-range, range]`.
    pub fn random(rng: &mut Xorshift64, range: i32) -> Self {
        LinePredicate {
            a: rng.signed_range(range) as i64,
            b: rng.signed_range(range) as i64,
            c: rng.signed_range(range) as i64,
        }
    }

    #[inline]
    fn classify(&self, p: Point) -> Side {
        let v = self.a * p.x() as i64 + self.b * p.y() as i64 + self.c;
        if v > 0 {
            Side::Above
        } else {
            Side::BelowOrOn
        }
    }
}

/// Apply the two cyclic shifts from section 4.5 to a freshly-written child
/// buffer: one random element pushed to the front, one (distinct) random
/// element pushed to the back.
fn apply_mutation(child: &mut [Point], rng: &mut Xorshift64) {
    let len = child.len();
    if len < 2 {
        return;
    }
    let i = rng.below(len as u32) as usize;
    child[..=i].rotate_right(1);

    // Redraw until we land on a post-shift index distinct from the front
    // slot we just filled, so the two shifts target different elements.
    let mut j = rng.below(len as u32) as usize;
    while j == 0 {
        j = rng.below(len as u32) as usize;
    }
    child[j..].rotate_left(1);
}

/// Crossover + mutate: walk `parent_a` and `parent_b` in lockstep over their
/// own orders, emitting from `parent_a` every point strictly above the
/// line and from `parent_b` every point not-above it, then apply mutation.
/// Every point of `E` lies on exactly one side of the line and both parents
/// contain every point of `E` exactly once, so `child` is a bijection on `E`
/// without any post-hoc check (property 8).
pub fn crossover_mutate(
    parent_a: &[Point],
    parent_b: &[Point],
    line: LinePredicate,
    child: &mut [Point],
    rng: &mut Xorshift64,
) {
    debug_assert_eq!(parent_a.len(), parent_b.len());
    debug_assert_eq!(parent_a.len(), child.len());

    let mut w = 0usize;
    for &p in parent_a {
        if line.classify(p) == Side::Above {
            child[w] = p;
            w += 1;
        }
    }
    for &p in parent_b {
        if line.classify(p) == Side::BelowOrOn {
            child[w] = p;
            w += 1;
        }
    }
    debug_assert_eq!(w, child.len());

    apply_mutation(child, rng);
}

/// Copy + mutate: copy a single parent into `child`, then apply mutation.
pub fn copy_mutate(parent: &[Point], child: &mut [Point], rng: &mut Xorshift64) {
    debug_assert_eq!(parent.len(), child.len());
    child.copy_from_slice(parent);
    apply_mutation(child, rng);
}
