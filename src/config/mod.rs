//! Configuration module

pub mod benchmark_config;
pub mod cli;
pub mod workload_config;

pub use benchmark_config::{
    normalize_thread_counts, BenchmarkConfig, BenchmarkMode, DEFAULT_SWEEP_THREADS,
};
pub use cli::{CliArgs, ModeArgs, OutputFormat};
pub use workload_config::WorkloadCase;
