//! sqtile_core — evolutionary search engine for the square-tiling puzzle.
//!
//! Given a grid (a rectangular mask of blocked/empty cells), finds a
//! low-cardinality decomposition of the empty cells into axis-aligned
//! squares. The search is a permutation-genome genetic algorithm: a greedy
//! decoder turns a permutation over the grid's "eligible" points into a
//! squares-count fitness, crossover/mutation operators breed new
//! permutations that are bijections on that point set by construction, and
//! `M` independent island populations search in parallel, occasionally
//! exchanging their best individual.
//!
//! This crate owns the search core only. Puzzle-file parsing, cluster
//! networking, the challenge-API client, the CLI, and logging configuration
//! are external collaborators — see `DESIGN.md`.
//!
//! ```
//! use sqtile_core::{solve, Grid, SolverConfig};
//!
//! let grid = Grid::from_rows(&vec![vec![false; 4]; 4]).unwrap();
//! let config = SolverConfig { deadline_ms: 50, seed: Some(1), ..SolverConfig::default() };
//! let report = solve(&grid, &config).unwrap();
//! assert!(report.square_count >= 1);
//! ```

#![deny(rust_2018_idioms, unused_must_use)]

pub mod coord;
pub mod decode;
pub mod error;
pub mod genome;
pub mod grid;
pub mod island;
pub mod mailbox;
pub mod operators;
pub mod population;
pub mod rng;
pub mod seed;
pub mod worker;

pub use coord::Point;
pub use decode::Square;
pub use error::{TileError, TileResult};
pub use grid::Grid;
pub use worker::{solve, solve_cancellable, CancelToken, SolveReport, SolverConfig};

/// Construct a fresh [`CancelToken`] for an upcoming [`solve_cancellable`] call.
/// Thin wrapper around `CancelToken::new` for callers that prefer a free
/// function at the crate root.
pub fn cancel_token() -> CancelToken {
    CancelToken::new()
}
