//! Workload generation
//!
//! This module provides:
//! - Operation kinds and the fixed value domain
//! - OpMix: member/insert/delete fractions with cumulative selection
//! - Budget partitioning across worker ranks
//! - Per-thread operation streams and their seeds
//! - Initial population of the set

pub mod mix;
pub mod operation;
pub mod partition;
pub mod populate;
pub mod seed;
pub mod stream;

pub use mix::OpMix;
pub use operation::{OpKind, OpTally, Operation, Value, VALUE_DOMAIN};
pub use partition::{ops_for_rank, split};
pub use populate::{distinct_values, populate};
pub use seed::{RunSeeds, SeedSource};
pub use stream::OpStream;
