//! list-lock-bench library
//!
//! Throughput benchmark for a sorted linked-list set under three
//! synchronization policies: none, one mutex, and one reader-writer lock.

pub mod benchmark;
pub mod config;
pub mod list;
pub mod metrics;
pub mod policy;
pub mod utils;
pub mod workload;
