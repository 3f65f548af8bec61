//! Single-run harness
//!
//! One run is: populate a fresh list, wrap it in the chosen policy, time the
//! workers from first spawn to last join, then tear everything down. All run
//! state lives in locals borrowed by scoped threads, so independent runs can
//! execute side by side.

use std::num::NonZeroU64;
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use super::worker::{Worker, WorkerResult};
use crate::config::BenchmarkConfig;
use crate::list::SortedList;
use crate::policy::{ListPolicy, MutexList, PolicyKind, RwLockList, Unsynchronized};
use crate::utils::{BenchmarkError, Result};
use crate::workload::{populate, split, OpMix, OpStream, OpTally, SeedSource, Value};

/// Outcome of one timed run
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub policy: PolicyKind,
    /// Threads actually used (always 1 for Serial)
    pub threads: usize,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    pub tally: OpTally,
    /// Set size after population, before the timed region
    pub initial_len: usize,
    /// Set size after the run
    pub final_len: usize,
}

impl RunResult {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Operations per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_secs();
        if secs > 0.0 {
            self.tally.total() as f64 / secs
        } else {
            0.0
        }
    }
}

fn serialize_secs<S>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_f64(d.as_secs_f64())
}

/// Executes timed runs for a fixed workload
#[derive(Debug)]
pub struct Harness {
    initial_size: usize,
    total_ops: u64,
    mix: OpMix,
    seeds: SeedSource,
    validate_every: Option<NonZeroU64>,
}

impl Harness {
    pub fn new(initial_size: usize, total_ops: u64, mix: OpMix, seed: u64) -> Self {
        Self {
            initial_size,
            total_ops,
            mix,
            seeds: SeedSource::new(seed),
            validate_every: None,
        }
    }

    pub fn from_config(config: &BenchmarkConfig) -> Self {
        Self::new(
            config.initial_size,
            config.total_ops,
            config.mix,
            config.seed,
        )
        .with_validation(config.validate_every)
    }

    /// Validate the list under its lock every N operations per worker
    pub fn with_validation(mut self, every: Option<NonZeroU64>) -> Self {
        self.validate_every = every;
        self
    }

    pub fn seed_base(&self) -> u64 {
        self.seeds.base()
    }

    /// Run one populate → execute → teardown cycle
    pub fn run_once(&self, policy: PolicyKind, threads: usize) -> Result<RunResult> {
        if threads == 0 {
            return Err(BenchmarkError::Config(
                "thread count must be at least 1".to_string(),
            ));
        }
        let threads = if policy.is_concurrent() {
            threads
        } else {
            if threads > 1 {
                debug!("Serial policy ignores thread count {}, using 1", threads);
            }
            1
        };

        let seeds = self.seeds.next_run();

        let mut list = SortedList::new();
        let mut rng = fastrand::Rng::with_seed(seeds.population());
        populate(&mut list, self.initial_size, &mut rng)?;
        let initial_len = list.len();
        debug!(
            "{} run: populated {} values, {} ops across {} thread(s)",
            policy, initial_len, self.total_ops, threads
        );

        let workers: Vec<Worker> = split(self.total_ops, threads)
            .into_iter()
            .enumerate()
            .map(|(rank, ops)| {
                Worker::new(
                    rank,
                    ops,
                    OpStream::new(seeds.worker(rank), self.mix),
                    self.validate_every,
                )
            })
            .collect();

        let (elapsed, results, list) = match policy {
            PolicyKind::Serial => measure(Unsynchronized::new(list), workers, execute_inline)?,
            PolicyKind::Mutex => measure(MutexList::new(list), workers, execute_threaded)?,
            PolicyKind::RwLock => measure(RwLockList::new(list), workers, execute_threaded)?,
        };

        let mut tally = OpTally::default();
        for result in &results {
            tally.merge(&result.tally);
        }
        if tally.total() != self.total_ops {
            return Err(BenchmarkError::Worker(format!(
                "workers executed {} of {} operations",
                tally.total(),
                self.total_ops
            )));
        }

        let final_len = list.len();
        drop(list);

        debug!(
            "{} run with {} thread(s) took {:?}",
            policy, threads, elapsed
        );
        Ok(RunResult {
            policy,
            threads,
            elapsed,
            tally,
            initial_len,
            final_len,
        })
    }
}

/// Time `execute` over a freshly initialized policy, then unwrap the list
fn measure<P, F>(
    policy: P,
    workers: Vec<Worker>,
    execute: F,
) -> Result<(Duration, Vec<WorkerResult>, SortedList<Value>)>
where
    P: ListPolicy<Value>,
    F: FnOnce(&P, Vec<Worker>) -> Result<Vec<WorkerResult>>,
{
    debug!(
        "Timing {} worker(s) under {}",
        workers.len(),
        policy.kind()
    );
    let start = Instant::now();
    let results = execute(&policy, workers)?;
    let elapsed = start.elapsed();
    Ok((elapsed, results, policy.into_inner()))
}

/// Run workers one after another on the calling thread
fn execute_inline<P>(policy: &P, workers: Vec<Worker>) -> Result<Vec<WorkerResult>>
where
    P: ListPolicy<Value>,
{
    workers.into_iter().map(|worker| worker.run(policy)).collect()
}

/// Run each worker on its own OS thread and join them all
fn execute_threaded<P>(policy: &P, workers: Vec<Worker>) -> Result<Vec<WorkerResult>>
where
    P: ListPolicy<Value> + Sync,
{
    thread::scope(|scope| -> Result<Vec<WorkerResult>> {
        let handles = workers
            .into_iter()
            .map(|worker| {
                let rank = worker.rank();
                thread::Builder::new()
                    .name(format!("list-worker-{}", rank))
                    .spawn_scoped(scope, move || worker.run(policy))
                    .map_err(|e| {
                        BenchmarkError::Worker(format!("failed to spawn worker {}: {}", rank, e))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| BenchmarkError::Worker("worker thread panicked".to_string()))
                    .and_then(|result| result)
            })
            .collect()
    })
}
