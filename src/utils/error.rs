//! Error types for list-lock-bench

use std::io;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid case number {0}. Use 1, 2, or 3.")]
    InvalidCase(u32),

    #[error("m_member + m_insert cannot exceed 1.0 (got {member} + {insert})")]
    FractionSum { member: f64, insert: f64 },

    #[error("Cannot draw {requested} distinct values from a domain of {domain}")]
    DomainExhausted { requested: usize, domain: u32 },

    #[error("List corrupted: {0}")]
    Corrupted(#[from] ListViolation),

    #[error("Worker error: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structural invariant violations detected by a validation pass
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListViolation {
    #[error("node {position} is not strictly greater than its predecessor")]
    OutOfOrder { position: usize },

    #[error("cached length {recorded} does not match {actual} reachable nodes")]
    LengthMismatch { recorded: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, BenchmarkError>;
