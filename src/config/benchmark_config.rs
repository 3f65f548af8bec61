//! Benchmark configuration derived from CLI arguments

use std::num::NonZeroU64;
use std::path::PathBuf;

use super::cli::{CliArgs, ModeArgs, OutputFormat};
use super::workload_config::WorkloadCase;
use crate::utils::{BenchmarkError, Result};
use crate::workload::{OpMix, VALUE_DOMAIN};

/// Thread counts swept by default in statistical mode
pub const DEFAULT_SWEEP_THREADS: [usize; 4] = [1, 2, 4, 8];

/// Which driver to run
#[derive(Debug, Clone, PartialEq)]
pub enum BenchmarkMode {
    /// Serial, mutex and rwlock once each at one thread count
    Comparison { threads: usize },
    /// Every policy at every thread count, `samples` runs each
    Sweep {
        case: WorkloadCase,
        samples: usize,
        thread_counts: Vec<usize>,
    },
}

/// Complete benchmark configuration
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub mode: BenchmarkMode,

    // Workload
    pub initial_size: usize,
    pub total_ops: u64,
    pub mix: OpMix,
    pub seed: u64,

    // Instrumentation
    pub validate_every: Option<NonZeroU64>,

    // Output
    pub output_path: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub csv_output: Option<PathBuf>,
    pub quiet: bool,
}

impl BenchmarkConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        // Validate first
        args.validate().map_err(BenchmarkError::Usage)?;

        let (mode, initial_size, total_ops, mix) = match &args.mode {
            ModeArgs::Run {
                n,
                m,
                thread_count,
                m_member,
                m_insert,
            } => (
                BenchmarkMode::Comparison {
                    threads: *thread_count,
                },
                *n,
                *m,
                OpMix::new(*m_member, *m_insert)?,
            ),
            ModeArgs::Sweep {
                case_number,
                n,
                m,
                samples,
                threads,
            } => {
                let case = WorkloadCase::from_number(*case_number)?;
                (
                    BenchmarkMode::Sweep {
                        case,
                        samples: *samples,
                        thread_counts: normalize_thread_counts(threads),
                    },
                    *n,
                    *m,
                    case.mix(),
                )
            }
        };

        let config = Self {
            mode,
            initial_size,
            total_ops,
            mix,
            seed: args.seed,
            validate_every: NonZeroU64::new(args.validate_every),
            output_path: args.output.clone(),
            output_format: args.output_format,
            csv_output: args.csv_output.clone(),
            quiet: args.quiet,
        };
        config.check()?;
        Ok(config)
    }

    /// Fixed single-run configuration with default output settings
    pub fn comparison(
        initial_size: usize,
        total_ops: u64,
        threads: usize,
        mix: OpMix,
    ) -> Result<Self> {
        let mode = BenchmarkMode::Comparison { threads };
        let config = Self::base(mode, initial_size, total_ops, mix);
        config.check()?;
        Ok(config)
    }

    /// Statistical sweep configuration over the default thread counts
    pub fn sweep(
        case: WorkloadCase,
        initial_size: usize,
        total_ops: u64,
        samples: usize,
    ) -> Result<Self> {
        let mode = BenchmarkMode::Sweep {
            case,
            samples,
            thread_counts: DEFAULT_SWEEP_THREADS.to_vec(),
        };
        let config = Self::base(mode, initial_size, total_ops, case.mix());
        config.check()?;
        Ok(config)
    }

    /// Use a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Suppress banners and progress bars
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    fn base(mode: BenchmarkMode, initial_size: usize, total_ops: u64, mix: OpMix) -> Self {
        Self {
            mode,
            initial_size,
            total_ops,
            mix,
            seed: 0,
            validate_every: None,
            output_path: None,
            output_format: OutputFormat::Text,
            csv_output: None,
            quiet: false,
        }
    }

    /// Semantic checks shared by every constructor
    fn check(&self) -> Result<()> {
        if self.initial_size > VALUE_DOMAIN as usize {
            return Err(BenchmarkError::DomainExhausted {
                requested: self.initial_size,
                domain: VALUE_DOMAIN,
            });
        }

        match &self.mode {
            BenchmarkMode::Comparison { threads } => {
                if *threads == 0 {
                    return Err(BenchmarkError::Config(
                        "thread count must be at least 1".to_string(),
                    ));
                }
            }
            BenchmarkMode::Sweep {
                samples,
                thread_counts,
                ..
            } => {
                if *samples == 0 {
                    return Err(BenchmarkError::Config(
                        "samples must be at least 1".to_string(),
                    ));
                }
                if thread_counts.is_empty() || thread_counts.contains(&0) {
                    return Err(BenchmarkError::Config(
                        "thread counts must be non-empty and at least 1".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// One-line summary for exported results
    pub fn summary(&self) -> String {
        let mode = match &self.mode {
            BenchmarkMode::Comparison { threads } => format!("run threads={}", threads),
            BenchmarkMode::Sweep {
                case,
                samples,
                thread_counts,
            } => format!(
                "sweep case={} samples={} threads={:?}",
                case.number(),
                samples,
                thread_counts
            ),
        };
        format!(
            "{}, n={}, m={}, mix={}",
            mode,
            self.initial_size,
            self.total_ops,
            self.mix.describe()
        )
    }
}

/// Ascending, duplicate-free thread counts
pub fn normalize_thread_counts(counts: &[usize]) -> Vec<usize> {
    let mut counts = counts.to_vec();
    counts.sort_unstable();
    counts.dedup();
    counts
}
