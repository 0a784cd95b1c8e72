//! The orchestrator: spawns `M` islands as OS threads sharing one read-only
//! [`Grid`] and a small peer hub, waits for the deadline, then reduces the
//! per-island results to the best by fitness (section 5, "Cancellation &
//! timeout").

use crate::decode::Square;
use crate::error::TileError;
use crate::grid::Grid;
use crate::island::{run_island, Deadline, IslandResult};
use crate::mailbox::Mailbox;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// A cooperative stop flag a caller can hold onto and flip from another
/// thread to cancel an in-flight [`solve`] before `deadline_ms` elapses
/// (section 5, "Cancellation & timeout").
#[derive(Clone)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, std::sync::atomic::Ordering::Relaxed);
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        CancelToken::new()
    }
}

/// Tunable parameters for one solve (section 3.1). Library-level config
/// only: reading these from the environment or a config file is a caller
/// concern, not this crate's.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// `K`: elite pool size per island. Default 100.
    pub population_size: usize,
    /// `M`: number of independent islands to run on this machine. Default
    /// is the platform's available parallelism.
    pub workers_per_machine: usize,
    /// Wall-clock budget for the whole solve. Default 10 000 ms.
    pub deadline_ms: u64,
    /// Top-level PRNG seed; `None` draws one from OS entropy so repeated
    /// solves of the same grid still differ.
    pub seed: Option<u64>,
    /// Bound on crossover line-predicate coefficients. Default 64.
    pub line_coefficient_range: i32,
    /// How often (in generations) an island publishes its best to peers and
    /// checks for an adoptable peer offering. Default 8.
    pub peer_share_interval_generations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            population_size: 100,
            workers_per_machine: std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
            deadline_ms: 10_000,
            seed: None,
            line_coefficient_range: 64,
            peer_share_interval_generations: 8,
        }
    }
}

/// The result of a solve: the square decomposition plus the diagnostic
/// counters a caller's logger may want to record (section 1.1).
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub squares: Vec<Square>,
    pub square_count: u32,
    /// Best fitness (== `square_count`) each island ended with, in the order
    /// islands were spawned.
    pub island_best_fitnesses: Vec<u32>,
    /// Generations each island completed before the deadline, same order.
    pub island_generations_run: Vec<u64>,
}

/// Run a full solve: `M` islands in parallel, each an independent
/// permutation search against `grid`, reduced to the best decomposition
/// found by any of them.
pub fn solve(grid: &Grid, config: &SolverConfig) -> Result<SolveReport, TileError> {
    solve_cancellable(grid, config, &CancelToken::new())
}

/// Same as [`solve`], but takes an explicit [`CancelToken`] the caller can
/// flip from another thread to cut the solve short.
pub fn solve_cancellable(grid: &Grid, config: &SolverConfig, cancel: &CancelToken) -> Result<SolveReport, TileError> {
    if config.population_size == 0 {
        return Err(TileError::BadGrid("population_size must be nonzero"));
    }
    let workers = config.workers_per_machine.max(1);
    let top_seed = config.seed.unwrap_or_else(random_seed_from_entropy);
    let deadline = Arc::new(Deadline::after_with_token(Duration::from_millis(config.deadline_ms), cancel.0.clone()));
    let mailbox = Arc::new(Mailbox::new(workers.max(2)));
    let grid = Arc::new(grid.clone());

    let population_size = config.population_size;
    let line_coefficient_range = config.line_coefficient_range;
    let peer_share_interval_generations = config.peer_share_interval_generations;

    let handles: Vec<_> = (0..workers)
        .map(|worker_index| {
            let grid = Arc::clone(&grid);
            let deadline = Arc::clone(&deadline);
            let mailbox = Arc::clone(&mailbox);
            std::thread::spawn(move || -> IslandResult {
                run_island(
                    &grid,
                    population_size,
                    line_coefficient_range,
                    peer_share_interval_generations,
                    top_seed,
                    worker_index as u32,
                    &deadline,
                    &mailbox,
                )
            })
        })
        .collect();

    let results: Vec<IslandResult> = handles
        .into_iter()
        .map(|h| h.join().expect("island thread panicked"))
        .collect();

    let best = results
        .iter()
        .min_by_key(|r| r.best_fitness)
        .expect("workers.max(1) guarantees at least one result");

    Ok(SolveReport {
        squares: best.squares.clone(),
        square_count: best.best_fitness,
        island_best_fitnesses: results.iter().map(|r| r.best_fitness).collect(),
        island_generations_run: results.iter().map(|r| r.generations_run).collect(),
    })
}

/// Draw a top-level seed from OS entropy without adding a `rand` dependency:
/// mix process-local, time-local, and address-local entropy the same way
/// `std`'s own `HashMap` default-seeds its `RandomState`.
fn random_seed_from_entropy() -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};
    RandomState::new().build_hasher().finish()
}
