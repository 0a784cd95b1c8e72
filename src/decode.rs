//! The greedy decoder: turns a permutation over `E` into a squares-count
//! fitness (fast mode) or a concrete decomposition (expansion mode).
//!
//! Both modes share the same traversal and the same "reject a first-pass
//! 1x1" rule (see module docs in `spec.md` section 4.4 for the no-1x1-loss
//! argument); fast mode simply skips materialising the output list and the
//! cleanup second pass, instead deriving the leftover count algebraically
//! from the total covered area.

use crate::coord::Point;
use crate::grid::Grid;

/// Reusable decoder scratch: a `width x height` "covered" bitmap, implemented
/// as a generation-stamped array so clearing between evaluations is O(1)
/// (bump a counter) rather than O(width * height).
#[derive(Debug, Clone)]
pub struct Scratch {
    stamps: Vec<u64>,
    generation: u64,
    width: usize,
    height: usize,
}

impl Scratch {
    /// Allocate scratch for a grid of the given dimensions. Call once per
    /// solve (or per island); reused across every evaluation.
    pub fn new(width: u16, height: u16) -> Self {
        let (w, h) = (width as usize, height as usize);
        Scratch { stamps: vec![0u64; w * h], generation: 0, width: w, height: h }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width + x as usize
    }

    /// Start a fresh evaluation: every cell becomes "uncovered" in O(1).
    #[inline]
    fn begin_evaluation(&mut self) {
        self.generation += 1;
    }

    #[inline]
    fn is_covered(&self, x: u16, y: u16) -> bool {
        self.stamps[self.index(x, y)] == self.generation
    }

    #[inline]
    fn mark_covered(&mut self, x: u16, y: u16) {
        let idx = self.index(x, y);
        self.stamps[idx] = self.generation;
    }

    fn mark_square_covered(&mut self, x: u16, y: u16, s: u16) {
        for dy in 0..s {
            for dx in 0..s {
                self.mark_covered(x + dx, y + dy);
            }
        }
    }
}

/// A placed square in an expanded decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub x: u16,
    pub y: u16,
    pub size: u16,
}

/// Expanding-square test: the largest `s <= grid.n_at(x, y)` such that the
/// `s x s` block rooted at `(x, y)` is entirely uncovered. `N(x, y)` already
/// guarantees the block is in-grid and empty up to that bound, so only
/// *coverage* needs checking here, and only the newly-added border per step
/// (not the whole square again), since inner cells were already verified
/// uncovered by the previous, smaller step.
fn max_uncovered_square(grid: &Grid, scratch: &Scratch, x: u16, y: u16) -> u16 {
    let bound = grid.n_at(x, y);
    let mut s = 1u16;
    while s < bound {
        let ns = s + 1;
        let border_y = y + ns - 1;
        let mut ok = (0..ns).all(|dx| !scratch.is_covered(x + dx, border_y));
        if ok {
            let border_x = x + ns - 1;
            ok = (0..ns - 1).all(|dy| !scratch.is_covered(border_x, y + dy));
        }
        if !ok {
            break;
        }
        s = ns;
    }
    s
}

/// Fast-count mode: returns only the squares-count fitness, never
/// materialising a decomposition. This is the hot-loop scoring function.
pub fn fast_count(perm: &[Point], grid: &Grid, scratch: &mut Scratch) -> u32 {
    scratch.begin_evaluation();
    let mut squares_drawn: u32 = 0;
    let mut total_covered: u64 = 0;

    for &p in perm {
        let (x, y) = (p.x(), p.y());
        if scratch.is_covered(x, y) {
            continue;
        }
        let s = max_uncovered_square(grid, scratch, x, y);
        if s <= 1 {
            continue; // no 1x1s in pass 1 (see no-1x1-loss lemma)
        }
        scratch.mark_square_covered(x, y, s);
        squares_drawn += 1;
        total_covered += s as u64 * s as u64;
    }

    let leftover = grid.empty_cells() as u64 - total_covered;
    squares_drawn + leftover as u32
}

/// Full expansion mode: returns the concrete `(x, y, size)` decomposition,
/// including the cleanup second pass that fills every still-uncovered empty
/// cell with a 1x1 square.
pub fn expand(perm: &[Point], grid: &Grid, scratch: &mut Scratch) -> Vec<Square> {
    scratch.begin_evaluation();
    let mut squares = Vec::new();

    for &p in perm {
        let (x, y) = (p.x(), p.y());
        if scratch.is_covered(x, y) {
            continue;
        }
        let s = max_uncovered_square(grid, scratch, x, y);
        if s <= 1 {
            continue;
        }
        scratch.mark_square_covered(x, y, s);
        squares.push(Square { x, y, size: s });
    }

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.is_blocked(x, y) && !scratch.is_covered(x, y) {
                scratch.mark_covered(x, y);
                squares.push(Square { x, y, size: 1 });
            }
        }
    }

    squares
}
