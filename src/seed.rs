//! Initial population construction (section 4.9).
//!
//! A handful of individuals are deterministic heuristic seeds — sorts on X,
//! Y, and N (ascending/descending) plus a few small weighted-sum keys —
//! since seeded sorts empirically improve early-generation fitness; the
//! rest of the population is filled with uniform-random shuffles of `E` to
//! preserve diversity.

use crate::coord::Point;
use crate::grid::Grid;
use crate::rng::Xorshift64;

/// Small integer coefficient triples for the weighted-sum seed keys
/// `alpha*X + beta*Y + gamma*N`.
const WEIGHTED_KEYS: [(i32, i32, i32); 4] = [(1, 1, -1), (1, -1, 1), (-1, 1, 1), (2, 1, 1)];

/// Number of deterministic heuristic seeds this module can produce: 6 pure
/// sorts (asc/desc on X, Y, N) plus the weighted-sum keys above.
pub const HEURISTIC_SEED_COUNT: usize = 6 + WEIGHTED_KEYS.len();

fn key_x(p: Point, _grid: &Grid) -> i64 {
    p.x() as i64
}
fn key_y(p: Point, _grid: &Grid) -> i64 {
    p.y() as i64
}
fn key_n(p: Point, grid: &Grid) -> i64 {
    grid.n_at(p.x(), p.y()) as i64
}

fn sorted_by<F>(eligible: &[Point], grid: &Grid, key: F, descending: bool) -> Vec<Point>
where
    F: Fn(Point, &Grid) -> i64,
{
    let mut v = eligible.to_vec();
    v.sort_by_key(|&p| {
        let k = key(p, grid);
        if descending {
            -k
        } else {
            k
        }
    });
    v
}

fn weighted_sort(eligible: &[Point], grid: &Grid, alpha: i32, beta: i32, gamma: i32) -> Vec<Point> {
    let mut v = eligible.to_vec();
    v.sort_by_key(|&p| {
        alpha as i64 * p.x() as i64 + beta as i64 * p.y() as i64 + gamma as i64 * grid.n_at(p.x(), p.y()) as i64
    });
    v
}

fn random_shuffle(eligible: &[Point], rng: &mut Xorshift64) -> Vec<Point> {
    let mut v = eligible.to_vec();
    for i in (1..v.len()).rev() {
        let j = rng.below(i as u32 + 1) as usize;
        v.swap(i, j);
    }
    v
}

/// Build `count` initial individuals: up to [`HEURISTIC_SEED_COUNT`]
/// deterministic heuristic sorts, then random shuffles for the rest.
pub fn build_initial_population(grid: &Grid, count: usize, rng: &mut Xorshift64) -> Vec<Vec<Point>> {
    let eligible = grid.eligible();
    let mut out = Vec::with_capacity(count);

    let heuristics: [(fn(Point, &Grid) -> i64, bool); 6] = [
        (key_x, false),
        (key_x, true),
        (key_y, false),
        (key_y, true),
        (key_n, false),
        (key_n, true),
    ];
    for (key, descending) in heuristics {
        if out.len() >= count {
            break;
        }
        out.push(sorted_by(eligible, grid, key, descending));
    }
    for &(alpha, beta, gamma) in WEIGHTED_KEYS.iter() {
        if out.len() >= count {
            break;
        }
        out.push(weighted_sort(eligible, grid, alpha, beta, gamma));
    }
    while out.len() < count {
        out.push(random_shuffle(eligible, rng));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::is_bijection_on;

    #[test]
    fn every_seed_is_a_bijection() {
        let rows = vec![vec![false; 6]; 6];
        let grid = Grid::from_rows(&rows).unwrap();
        let mut rng = Xorshift64::seed_from_u64(5);
        let pop = build_initial_population(&grid, 20, &mut rng);
        assert_eq!(pop.len(), 20);
        for individual in &pop {
            assert!(is_bijection_on(individual, grid.eligible()));
        }
    }

    #[test]
    fn fewer_seeds_than_heuristics_still_valid() {
        let rows = vec![vec![false; 4]; 4];
        let grid = Grid::from_rows(&rows).unwrap();
        let mut rng = Xorshift64::seed_from_u64(6);
        let pop = build_initial_population(&grid, 3, &mut rng);
        assert_eq!(pop.len(), 3);
        for individual in &pop {
            assert!(is_bijection_on(individual, grid.eligible()));
        }
    }

    #[test]
    fn deterministic_given_fixed_seed() {
        let rows = vec![vec![false; 5]; 5];
        let grid = Grid::from_rows(&rows).unwrap();
        let mut rng_a = Xorshift64::seed_from_u64(11);
        let mut rng_b = Xorshift64::seed_from_u64(11);
        let pop_a = build_initial_population(&grid, 15, &mut rng_a);
        let pop_b = build_initial_population(&grid, 15, &mut rng_b);
        assert_eq!(pop_a, pop_b);
    }
}
