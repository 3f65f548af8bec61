//! Sample series statistics
//!
//! Elapsed times of repeated runs for one (policy, thread count) pair,
//! reduced to mean and Bessel-corrected standard deviation.

use std::time::Duration;

use serde::Serialize;

/// Ordered elapsed-time measurements
#[derive(Debug, Clone, Default)]
pub struct SampleSeries {
    samples: Vec<Duration>,
}

/// Reduced statistics of a series, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub samples: usize,
    pub mean_secs: f64,
    /// `None` with fewer than two samples
    pub std_dev_secs: Option<f64>,
    pub min_secs: f64,
    pub max_secs: f64,
}

impl SampleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, elapsed: Duration) {
        self.samples.push(elapsed);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Arithmetic mean in seconds (0.0 for an empty series)
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.secs().sum::<f64>() / self.samples.len() as f64
    }

    /// Sample standard deviation in seconds, dividing by `len - 1`
    pub fn std_dev(&self) -> Option<f64> {
        if self.samples.len() < 2 {
            return None;
        }
        let mean = self.mean();
        let sum_sq: f64 = self.secs().map(|s| (s - mean) * (s - mean)).sum();
        Some((sum_sq / (self.samples.len() - 1) as f64).sqrt())
    }

    pub fn min(&self) -> f64 {
        self.samples.iter().min().map_or(0.0, Duration::as_secs_f64)
    }

    pub fn max(&self) -> f64 {
        self.samples.iter().max().map_or(0.0, Duration::as_secs_f64)
    }

    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary {
            samples: self.samples.len(),
            mean_secs: self.mean(),
            std_dev_secs: self.std_dev(),
            min_secs: self.min(),
            max_secs: self.max(),
        }
    }

    fn secs(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(Duration::as_secs_f64)
    }
}

/// Baseline time divided by measured time
///
/// `None` when the measured time is zero.
pub fn speedup(baseline_secs: f64, secs: f64) -> Option<f64> {
    if secs > 0.0 {
        Some(baseline_secs / secs)
    } else {
        None
    }
}
