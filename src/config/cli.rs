//! Command-line argument parsing
//!
//! Two modes:
//! - `run`: serial, mutex and rwlock once each at one thread count
//! - `sweep`: preset operation mixes across thread counts, repeated samples

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Linked-list ordered set benchmark: serial vs. mutex vs. read-write lock
#[derive(Parser, Debug, Clone)]
#[command(name = "list-lock-bench")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub mode: ModeArgs,

    // ===== Output Options =====
    /// Quiet mode (minimal output)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Report format on stdout
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output_format: OutputFormat,

    /// Write results as JSON to this file
    #[arg(short = 'o', long = "output", global = true)]
    pub output: Option<PathBuf>,

    /// Write results as CSV to this file
    #[arg(long = "csv", global = true)]
    pub csv_output: Option<PathBuf>,

    // ===== Advanced Options =====
    /// Seed for random number generation (0 = random seed)
    #[arg(long = "seed", default_value_t = 0, global = true)]
    pub seed: u64,

    /// Validate the list under its lock every N operations per worker (0 = never)
    #[arg(long = "validate-every", default_value_t = 0, global = true)]
    pub validate_every: u64,
}

/// Benchmark mode
#[derive(Subcommand, Debug, Clone)]
pub enum ModeArgs {
    /// Run serial, mutex and read-write lock once each at a fixed thread count
    #[command(allow_negative_numbers = true)]
    Run {
        /// Initial number of elements
        n: usize,
        /// Total number of operations
        m: u64,
        /// Number of worker threads
        thread_count: usize,
        /// Fraction of Member operations
        m_member: f64,
        /// Fraction of Insert operations (m_delete = 1.0 - m_member - m_insert)
        m_insert: f64,
    },

    /// Sweep all policies over thread counts with repeated samples
    Sweep {
        /// Preset mix: 1 = 99/0.5/0.5, 2 = 90/5/5, 3 = 50/25/25 (member/insert/delete %)
        case_number: u32,
        /// Initial number of elements
        n: usize,
        /// Total number of operations
        m: u64,
        /// Number of test runs per configuration
        samples: usize,
        /// Thread counts to sweep
        #[arg(long = "threads", value_delimiter = ',', default_value = "1,2,4,8")]
        threads: Vec<usize>,
    },
}

/// Output format for results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl CliArgs {
    /// Parse CLI arguments from command line
    ///
    /// Returns clap's error instead of exiting so the caller picks the exit code.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Process exit status for a parse failure
    ///
    /// `--help` and `--version` surface as errors that print to stdout; they
    /// exit 0. Every other parse error exits 1.
    pub fn exit_code(err: &clap::Error) -> i32 {
        if err.use_stderr() {
            1
        } else {
            0
        }
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.quiet && self.verbose {
            return Err("--quiet and --verbose are mutually exclusive".to_string());
        }

        match &self.mode {
            ModeArgs::Run { thread_count, .. } => {
                if *thread_count == 0 {
                    return Err("thread_count must be at least 1".to_string());
                }
            }
            ModeArgs::Sweep {
                samples, threads, ..
            } => {
                if *samples == 0 {
                    return Err("samples must be at least 1".to_string());
                }
                if threads.is_empty() {
                    return Err("--threads needs at least one thread count".to_string());
                }
                if threads.contains(&0) {
                    return Err("--threads values must be at least 1".to_string());
                }
            }
        }

        Ok(())
    }
}
