//! Timing comparison of the two search engines

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    search::{Algorithm, TranspositionCache},
    tictactoe::{Board, Player},
};

/// Iterations used when none are given
pub const DEFAULT_ITERATIONS: u32 = 10;

/// Measurements for one algorithm
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AlgorithmTiming {
    pub algorithm: Algorithm,
    /// Wall time of all timed searches together
    pub total: Duration,
    /// Average time of a single root decision
    pub per_decision: Duration,
    /// Boards expanded by one search from a fresh cache
    pub nodes_expanded: u64,
}

/// Result of [`run`]
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub iterations: u32,
    pub minimax: AlgorithmTiming,
    pub alpha_beta: AlgorithmTiming,
    /// How much less time alpha-beta took, in percent of minimax's time
    pub speedup_percent: f64,
}

/// Time both algorithms choosing X's opening move on an empty board.
///
/// Each algorithm runs once untimed first. Every timed search starts from a
/// fresh cache so no run profits from an earlier one.
pub fn run(iterations: u32) -> BenchmarkReport {
    let iterations = iterations.max(1);
    info!(iterations, "running search benchmark");

    let minimax = time_algorithm(Algorithm::Minimax, iterations);
    let alpha_beta = time_algorithm(Algorithm::AlphaBeta, iterations);
    let speedup_percent = speedup_percent(minimax.total, alpha_beta.total);

    BenchmarkReport {
        iterations,
        minimax,
        alpha_beta,
        speedup_percent,
    }
}

/// `(classic - optimized) / classic * 100`, or 0 when `classic` is zero
pub fn speedup_percent(classic: Duration, optimized: Duration) -> f64 {
    let classic = classic.as_secs_f64();
    if classic == 0.0 {
        return 0.0;
    }
    (classic - optimized.as_secs_f64()) / classic * 100.0
}

fn time_algorithm(algorithm: Algorithm, iterations: u32) -> AlgorithmTiming {
    let nodes_expanded = search_once(algorithm);

    let start = Instant::now();
    for _ in 0..iterations {
        search_once(algorithm);
    }
    let total = start.elapsed();

    debug!(%algorithm, ?total, nodes_expanded, "benchmark finished");
    AlgorithmTiming {
        algorithm,
        total,
        per_decision: total / iterations,
        nodes_expanded,
    }
}

fn search_once(algorithm: Algorithm) -> u64 {
    let mut board = Board::new();
    let mut cache = TranspositionCache::new();
    algorithm.search_with_cache(&mut board, true, Player::X, &mut cache);
    cache.stats().misses
}
