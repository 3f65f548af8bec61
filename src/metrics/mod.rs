//! Metrics collection and reporting
//!
//! This module provides:
//! - Sample statistics over repeated runs (mean, std-dev, speedup)
//! - Text, JSON and CSV rendering of reports

pub mod reporter;
pub mod stats;

pub use reporter::MetricsReporter;
pub use stats::{speedup, SampleSeries, SeriesSummary};
