//! The immutable, per-solve grid model.
//!
//! A [`Grid`] owns the blocked/empty mask, its dimensions, the precomputed
//! *max-square-at-point* table `N(x, y)`, and the canonical eligible-point
//! list `E` (points with `N >= 2`). All of it is read-only for the lifetime
//! of a solve and shared across islands without synchronisation.

use crate::coord::Point;
use crate::error::TileError;

/// Largest grid dimension the codec can address (coordinates pack into 16
/// bits each).
pub const MAX_DIM: usize = u16::MAX as usize;

/// An immutable grid: blocked mask, dimensions, `N`-table, and eligible list.
#[derive(Debug, Clone)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Row-major blocked mask, `len == width * height`.
    blocked: Vec<bool>,
    /// Row-major `N(x, y)`, side length of the largest square rooted here.
    n_table: Vec<u16>,
    /// Points with `N >= 2`, in row-major `(y, x)` order — the genome.
    eligible: Vec<Point>,
    /// Count of empty (non-blocked) cells, used by fast-count mode.
    empty_cells: u32,
}

impl Grid {
    /// Build a grid from an already-parsed row-major boolean mask (`true` =
    /// blocked). Parsing the mask out of a puzzle file is a caller concern;
    /// this constructor only ever sees the parsed result.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, TileError> {
        let height = rows.len();
        if height == 0 {
            return Err(TileError::BadGrid("grid has zero rows"));
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(TileError::BadGrid("grid has zero columns"));
        }
        if !rows.iter().all(|r| r.len() == width) {
            return Err(TileError::BadGrid("grid rows are not all the same width"));
        }
        if width > MAX_DIM || height > MAX_DIM {
            return Err(TileError::BadGrid("grid dimensions exceed u16::MAX"));
        }

        let mut blocked = Vec::with_capacity(width * height);
        for row in rows {
            blocked.extend_from_slice(row);
        }

        Self::from_mask(width as u16, height as u16, blocked)
    }

    /// Build a grid from a flat row-major blocked mask.
    pub fn from_mask(width: u16, height: u16, blocked: Vec<bool>) -> Result<Self, TileError> {
        let w = width as usize;
        let h = height as usize;
        if w == 0 || h == 0 {
            return Err(TileError::BadGrid("grid has a zero dimension"));
        }
        if blocked.len() != w * h {
            return Err(TileError::BadGrid("mask length does not match width * height"));
        }

        let empty_cells = blocked.iter().filter(|&&b| !b).count();
        if empty_cells == 0 {
            return Err(TileError::BadGrid("grid has no empty cells"));
        }

        let n_table = build_n_table(w, h, &blocked);
        let eligible = collect_eligible(w, h, &n_table);

        Ok(Grid {
            width,
            height,
            blocked,
            n_table,
            eligible,
            empty_cells: empty_cells as u32,
        })
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn empty_cells(&self) -> u32 {
        self.empty_cells
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Whether `(x, y)` is blocked. Panics if out of range (a caller bug).
    #[inline]
    pub fn is_blocked(&self, x: u16, y: u16) -> bool {
        self.blocked[self.index(x, y)]
    }

    /// `N(x, y)`: the largest side of a square rooted at `(x, y)`.
    #[inline]
    pub fn n_at(&self, x: u16, y: u16) -> u16 {
        self.n_table[self.index(x, y)]
    }

    /// The canonical eligible-point list `E` — the genome's coordinate
    /// space, points with `N >= 2` in row-major order.
    #[inline]
    pub fn eligible(&self) -> &[Point] {
        &self.eligible
    }

    /// `|E|`, the permutation length for this grid.
    #[inline]
    pub fn eligible_len(&self) -> usize {
        self.eligible.len()
    }
}

/// Reverse dynamic program: `N[x,y] = 0` if blocked, else
/// `1 + min(N[x+1,y], N[x,y+1], N[x+1,y+1])`, cells beyond the border
/// contributing `0`.
fn build_n_table(w: usize, h: usize, blocked: &[bool]) -> Vec<u16> {
    let mut n = vec![0u16; w * h];
    for y in (0..h).rev() {
        for x in (0..w).rev() {
            let idx = y * w + x;
            if blocked[idx] {
                n[idx] = 0;
                continue;
            }
            let right = if x + 1 < w { n[y * w + x + 1] } else { 0 };
            let down = if y + 1 < h { n[(y + 1) * w + x] } else { 0 };
            let diag = if x + 1 < w && y + 1 < h { n[(y + 1) * w + x + 1] } else { 0 };
            let m = right.min(down).min(diag);
            n[idx] = m.saturating_add(1);
        }
    }
    n
}

fn collect_eligible(w: usize, h: usize, n_table: &[u16]) -> Vec<Point> {
    let mut out = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if n_table[y * w + x] >= 2 {
                out.push(Point::pack(x as u16, y as u16));
            }
        }
    }
    out
}
