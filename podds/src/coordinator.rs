//! # Coordinator
//!
//! Splits a game budget across a pool of worker threads, gives each worker
//! an independently-mixed RNG seed, and merges their counters into the
//! shared total exactly once per worker at shutdown — no synchronization
//! inside the simulation hot loop.

use std::sync::{Arc, Mutex};
use std::thread;

use podds_core::errors::PokerError;

use crate::simulate::{Counters, Worker, DRAW, LOSS, NUM_COUNTERS, WIN};

/// Default game budget, matching the original `podds` CLI tool's default.
pub const DEFAULT_GAMES: u64 = 200_000;

/// Everything the coordinator needs to run one estimate.
pub struct RunConfig {
    pub players: u32,
    /// Flat `0..52` indices: the target's hole cards, then 0-5 community
    /// cards, already validated and deduplicated by the CLI layer.
    pub known: Vec<u8>,
    /// Worker count override (`PODDS_WORKERS`); falls back to
    /// [`std::thread::available_parallelism`] when `None`.
    pub workers: Option<usize>,
    /// Game budget override (`PODDS_GAMES`); falls back to
    /// [`DEFAULT_GAMES`] when `None`.
    pub games: Option<u64>,
    /// Fixes every worker's seed directly instead of mixing the wall clock
    /// with the worker index. Used by determinism tests (worker count 1);
    /// production runs leave this `None`.
    pub seed: Option<u32>,
}

pub struct RunReport {
    pub workers: usize,
    pub games: u64,
    pub counters: Counters,
}

impl RunReport {
    pub fn win_rate(&self) -> f64 {
        self.counters[WIN] as f64 / self.games as f64
    }

    pub fn draw_rate(&self) -> f64 {
        self.counters[DRAW] as f64 / self.games as f64
    }

    pub fn category_rate(&self, index: usize) -> f64 {
        self.counters[index] as f64 / self.games as f64
    }
}

/// Runs the full simulation: resolves the worker count, divides the game
/// budget evenly, spawns one thread per worker, and merges their counters
/// under a single mutex. Returns [`PokerError::CounterChecksumMismatch`] if
/// the merged outcome and category totals don't both match the number of
/// games actually played — a defect in a worker's bookkeeping, not in the
/// caller's input.
pub fn run(config: &RunConfig) -> Result<RunReport, PokerError> {
    let worker_count = resolve_worker_count(config.workers);
    let total_games = config.games.unwrap_or(DEFAULT_GAMES);
    let quota = (total_games / worker_count as u64).max(1);
    let effective_games = quota * worker_count as u64;

    let shared: Arc<Mutex<Counters>> = Arc::new(Mutex::new([0; NUM_COUNTERS]));
    let mut handles = Vec::with_capacity(worker_count);

    for index in 0..worker_count {
        let seed = config.seed.unwrap_or_else(|| mix_seed(index));
        let known = config.known.clone();
        let players = config.players;
        let shared = Arc::clone(&shared);

        handles.push(thread::spawn(move || {
            let mut worker = Worker::new(seed, players, &known);
            let local = worker.run_quota(quota);

            let mut totals = shared.lock().expect("counters mutex poisoned");
            for i in 0..NUM_COUNTERS {
                totals[i] += local[i];
            }
        }));
    }

    for handle in handles {
        handle.join().expect("simulation worker thread panicked");
    }

    let counters = *shared.lock().expect("counters mutex poisoned");
    let outcome_total: u64 = counters[LOSS] + counters[DRAW] + counters[WIN];
    let category_total: u64 = counters[3..NUM_COUNTERS].iter().sum();

    if outcome_total != effective_games || category_total != effective_games {
        return Err(PokerError::CounterChecksumMismatch {
            outcome_total,
            category_total,
            expected: effective_games,
        });
    }

    Ok(RunReport {
        workers: worker_count,
        games: effective_games,
        counters,
    })
}

fn resolve_worker_count(override_count: Option<usize>) -> usize {
    override_count.unwrap_or_else(|| {
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    })
}

/// Mixes a wall-clock timestamp with the worker index so independently
/// spawned workers never share (or trivially correlate) an RNG stream, even
/// when the underlying clock's resolution is coarser than the time it takes
/// to spawn them.
fn mix_seed(worker_index: usize) -> u32 {
    let nanos = chrono::Utc::now().timestamp_subsec_nanos();
    nanos ^ (worker_index as u32).wrapping_mul(0x9E37_79B1).wrapping_add(1)
}
