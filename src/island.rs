//! Per-worker search loop (section 4.10): build derivatives, score the seed
//! population, then breed/evaluate/select generations until the shared
//! deadline or stop flag fires, publishing to and adopting from peers at
//! generation boundaries along the way.

use crate::coord::Point;
use crate::decode::{self, Scratch, Square};
use crate::grid::Grid;
use crate::mailbox::{validate_offering, Mailbox, PeerOffering};
use crate::operators::{copy_mutate, crossover_mutate, LinePredicate};
use crate::population::Population;
use crate::rng::Xorshift64;
use crate::seed::build_initial_population;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// A deadline shared by every island in a solve: a fixed instant plus a
/// cooperative stop flag, so external cancellation and wall-clock expiry are
/// checked the same way at the same point (once per generation).
pub struct Deadline {
    at: Instant,
    stop: std::sync::Arc<AtomicBool>,
}

impl Deadline {
    pub fn after(duration: std::time::Duration) -> Self {
        Deadline::after_with_token(duration, std::sync::Arc::new(AtomicBool::new(false)))
    }

    /// Build a deadline sharing its stop flag with a caller-held token, so
    /// the caller can request early cancellation from another thread while
    /// a solve is in flight.
    pub fn after_with_token(duration: std::time::Duration, stop: std::sync::Arc<AtomicBool>) -> Self {
        Deadline { at: Instant::now() + duration, stop }
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.stop.load(Ordering::Relaxed) || Instant::now() >= self.at
    }

    /// Cooperatively request every island still running to stop.
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

/// What one island reports back to the worker once its deadline expires:
/// its best decomposition plus a few diagnostic counters for `SolveReport`.
pub struct IslandResult {
    pub squares: Vec<Square>,
    pub best_fitness: u32,
    pub generations_run: u64,
}

/// Run one island to completion. `worker_index` derives this island's PRNG
/// stream from the top-level seed (section 4.11); `mailbox` is this island's
/// slot in the machine's peer hub, shared read+write with every other island.
pub fn run_island(
    grid: &Grid,
    population_size: usize,
    line_coefficient_range: i32,
    peer_share_interval_generations: u32,
    seed: u64,
    worker_index: u32,
    deadline: &Deadline,
    mailbox: &Mailbox,
) -> IslandResult {
    let mut rng = Xorshift64::for_island(seed, worker_index);
    let eligible = grid.eligible();
    let mut scratch = Scratch::new(grid.width(), grid.height());
    let mut population = Population::new(population_size, eligible.len());

    let seeds = build_initial_population(grid, population_size, &mut rng);
    for (i, individual) in seeds.iter().enumerate() {
        population.set_parent(i, individual);
        let fitness = decode::fast_count(individual, grid, &mut scratch);
        population.set_fitness(i, fitness);
    }

    let mut generations_run: u64 = 0;
    loop {
        if deadline.expired() {
            break;
        }

        let k = population.k();
        for i in 0..k {
            let a = rng.below(k as u32) as usize;
            let use_crossover = rng.unit_f64() < 0.5;
            let line = use_crossover.then(|| LinePredicate::random(&mut rng, line_coefficient_range));
            let b = use_crossover.then(|| rng.below(k as u32) as usize);

            let (parents, child) = population.parents_and_child_mut(i);
            match (line, b) {
                (Some(line), Some(b)) => crossover_mutate(&parents[a], &parents[b], line, child, &mut rng),
                _ => copy_mutate(&parents[a], child, &mut rng),
            }

            let fitness = decode::fast_count(population.child(i), grid, &mut scratch);
            population.set_fitness(k + i, fitness);
        }

        population.select_top_k();
        generations_run += 1;

        if peer_share_interval_generations > 0 && generations_run % peer_share_interval_generations as u64 == 0 {
            let (best, best_fitness) = population.best_parent();
            mailbox.publish(PeerOffering { permutation: best.to_vec(), fitness: best_fitness });

            if let Some(offered) = mailbox.try_take() {
                if validate_offering(&offered, eligible).is_ok() && offered.fitness < population.worst_parent_fitness() {
                    let slot = rng.below(k as u32) as usize;
                    population.inject_into_child(slot, &offered.permutation, offered.fitness);
                }
            }
        }
    }

    let (best, best_fitness) = population.best_parent();
    let squares = decode::expand(best, grid, &mut scratch);
    IslandResult { squares, best_fitness, generations_run }
}
