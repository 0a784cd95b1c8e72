//! Solve demo for sqtile_core.
//!
//! Builds a synthetic rectangular grid (optionally with a blocked border)
//! and runs a full solve against it, printing the resulting decomposition
//! and a few diagnostic counters.
//!
//! Build & run:
//!   cargo run --release --example solve_demo -- --width=12 --height=12
//!   cargo run --release --example solve_demo -- --width=20 --height=20 --deadline-ms=2000 --seed=7
//!   cargo run --release --example solve_demo -- --width=16 --height=16 --workers=4 --border

use std::env;
use std::time::Instant;

use sqtile_core::{solve, Grid, SolverConfig};

struct Opts {
    width: usize,
    height: usize,
    deadline_ms: u64,
    seed: Option<u64>,
    workers: usize,
    border: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Opts { width: 12, height: 12, deadline_ms: 1000, seed: None, workers: 2, border: false }
    }
}

fn parse_args() -> Opts {
    let mut opts = Opts::default();
    for arg in env::args().skip(1) {
        if let Some(v) = arg.strip_prefix("--width=") {
            opts.width = v.parse().expect("--width expects an integer");
        } else if let Some(v) = arg.strip_prefix("--height=") {
            opts.height = v.parse().expect("--height expects an integer");
        } else if let Some(v) = arg.strip_prefix("--deadline-ms=") {
            opts.deadline_ms = v.parse().expect("--deadline-ms expects an integer");
        } else if let Some(v) = arg.strip_prefix("--seed=") {
            opts.seed = Some(v.parse().expect("--seed expects an integer"));
        } else if let Some(v) = arg.strip_prefix("--workers=") {
            opts.workers = v.parse().expect("--workers expects an integer");
        } else if arg == "--border" {
            opts.border = true;
        } else if arg == "--help" {
            print_help();
            std::process::exit(0);
        } else {
            eprintln!("unrecognised argument: {arg}");
            print_help();
            std::process::exit(1);
        }
    }
    opts
}

fn print_help() {
    eprintln!(
        "usage: solve_demo [--width=N] [--height=N] [--deadline-ms=N] [--seed=N] [--workers=N] [--border]"
    );
}

fn build_grid(opts: &Opts) -> Grid {
    let mut rows = vec![vec![false; opts.width]; opts.height];
    if opts.border {
        for x in 0..opts.width {
            rows[0][x] = true;
            rows[opts.height - 1][x] = true;
        }
        for row in rows.iter_mut() {
            row[0] = true;
            row[opts.width - 1] = true;
        }
    }
    Grid::from_rows(&rows).expect("synthetic grid is always well-formed")
}

fn main() {
    let opts = parse_args();
    let grid = build_grid(&opts);

    let config = SolverConfig {
        population_size: 100,
        workers_per_machine: opts.workers,
        deadline_ms: opts.deadline_ms,
        seed: opts.seed,
        ..SolverConfig::default()
    };

    println!("grid: {}x{} ({} empty cells)", grid.width(), grid.height(), grid.empty_cells());
    println!("config: {config:?}");

    let started = Instant::now();
    let report = solve(&grid, &config).expect("population_size is nonzero");
    let elapsed = started.elapsed();

    println!("solved in {:.2?} across {} island(s)", elapsed, report.island_best_fitnesses.len());
    println!("square count: {}", report.square_count);
    println!("per-island best fitness: {:?}", report.island_best_fitnesses);
    println!("per-island generations run: {:?}", report.island_generations_run);

    for sq in report.squares.iter().take(20) {
        println!("  square ({}, {}) size {}", sq.x, sq.y, sq.size);
    }
    if report.squares.len() > 20 {
        println!("  ... and {} more", report.squares.len() - 20);
    }
}
