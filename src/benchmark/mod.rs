//! Benchmark orchestration and workers
//!
//! This module provides the multi-threaded benchmark execution system:
//! - Worker: replays one rank's operation slice against a policy
//! - Harness: one populate → execute → teardown cycle, timed
//! - Orchestrator: drives comparison and sweep modes and collects reports

pub mod harness;
pub mod orchestrator;
pub mod worker;

pub use harness::{Harness, RunResult};
pub use orchestrator::{
    format_count, format_throughput, BenchmarkReport, ComparisonReport, Orchestrator, SweepReport,
    SweepRow,
};
pub use worker::{Worker, WorkerResult};
