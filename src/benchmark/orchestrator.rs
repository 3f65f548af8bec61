//! Benchmark orchestrator
//!
//! Drives the harness for both modes and collects reports:
//! - comparison: serial, mutex and rwlock once each at one thread count
//! - sweep: every policy at every thread count, repeated samples

use std::path::Path;
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use super::harness::{Harness, RunResult};
use crate::config::{normalize_thread_counts, BenchmarkConfig, BenchmarkMode, WorkloadCase};
use crate::metrics::stats::{speedup, SampleSeries, SeriesSummary};
use crate::metrics::MetricsReporter;
use crate::policy::PolicyKind;
use crate::utils::{BenchmarkError, Result};

/// Fixed single-run mode result
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub threads: usize,
    pub serial: RunResult,
    pub mutex: RunResult,
    pub rwlock: RunResult,
}

impl ComparisonReport {
    pub fn mutex_speedup(&self) -> Option<f64> {
        speedup(self.serial.elapsed_secs(), self.mutex.elapsed_secs())
    }

    pub fn rwlock_speedup(&self) -> Option<f64> {
        speedup(self.serial.elapsed_secs(), self.rwlock.elapsed_secs())
    }

    /// Read-write lock relative to mutex
    pub fn rwlock_over_mutex(&self) -> Option<f64> {
        speedup(self.mutex.elapsed_secs(), self.rwlock.elapsed_secs())
    }

    /// Runs in execution order
    pub fn runs(&self) -> [&RunResult; 3] {
        [&self.serial, &self.mutex, &self.rwlock]
    }
}

/// One (policy, thread count) line of a sweep
#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    pub policy: PolicyKind,
    pub threads: usize,
    /// `None` for configurations that are not run (serial above one thread)
    pub summary: Option<SeriesSummary>,
    /// Serial mean divided by this row's mean
    pub speedup: Option<f64>,
}

impl SweepRow {
    pub fn is_skipped(&self) -> bool {
        self.summary.is_none()
    }
}

/// Statistical sweep result
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub case: WorkloadCase,
    pub samples: usize,
    pub rows: Vec<SweepRow>,
}

/// Report produced by either mode
#[derive(Debug, Clone)]
pub enum BenchmarkReport {
    Comparison(ComparisonReport),
    Sweep(SweepReport),
}

/// Benchmark orchestrator
pub struct Orchestrator {
    config: Arc<BenchmarkConfig>,
    harness: Harness,
}

impl Orchestrator {
    /// Create new orchestrator
    pub fn new(config: BenchmarkConfig) -> Self {
        let harness = Harness::from_config(&config);
        if config.validate_every.is_some() {
            warn!("Structural validation is enabled; elapsed times include validation passes");
        }
        info!("Seed base: {:#018x}", harness.seed_base());
        Self {
            config: Arc::new(config),
            harness,
        }
    }

    /// Run whichever mode is configured
    pub fn run(&self) -> Result<BenchmarkReport> {
        match &self.config.mode {
            BenchmarkMode::Comparison { threads } => self
                .run_comparison(*threads)
                .map(BenchmarkReport::Comparison),
            BenchmarkMode::Sweep {
                case,
                samples,
                thread_counts,
            } => self
                .run_sweep(*case, *samples, thread_counts)
                .map(BenchmarkReport::Sweep),
        }
    }

    /// Serial, then mutex, then rwlock, once each
    pub fn run_comparison(&self, threads: usize) -> Result<ComparisonReport> {
        let reporter = self.reporter();
        let mut runs = Vec::with_capacity(PolicyKind::ALL.len());

        for policy in PolicyKind::ALL {
            info!("Running {} with {} thread(s)", policy, threads);
            let result = self.harness.run_once(policy, threads)?;
            if !self.config.quiet {
                reporter.print_phase(&result, &runs);
            }
            runs.push(result);
        }

        let mut runs = runs.into_iter();
        match (runs.next(), runs.next(), runs.next()) {
            (Some(serial), Some(mutex), Some(rwlock)) => Ok(ComparisonReport {
                threads,
                serial,
                mutex,
                rwlock,
            }),
            _ => Err(BenchmarkError::Worker(
                "comparison did not produce three runs".to_string(),
            )),
        }
    }

    /// Every policy across `thread_counts`, `samples` runs each
    ///
    /// Serial is always measured once at one thread as the speedup baseline;
    /// its rows for larger thread counts are reported as skipped. Thread
    /// counts are swept in ascending order without repeats.
    pub fn run_sweep(
        &self,
        case: WorkloadCase,
        samples: usize,
        thread_counts: &[usize],
    ) -> Result<SweepReport> {
        if samples == 0 {
            return Err(BenchmarkError::Config(
                "samples must be at least 1".to_string(),
            ));
        }
        if thread_counts.contains(&0) {
            return Err(BenchmarkError::Config(
                "thread counts must be at least 1".to_string(),
            ));
        }
        let thread_counts = normalize_thread_counts(thread_counts);

        let baseline = self.measure_row(PolicyKind::Serial, 1, samples, None)?;
        let serial_mean = baseline.summary.map(|s| s.mean_secs);

        let mut rows = Vec::with_capacity(PolicyKind::ALL.len() * thread_counts.len() + 1);
        rows.push(baseline);
        for &threads in thread_counts.iter().filter(|&&t| t > 1) {
            rows.push(SweepRow {
                policy: PolicyKind::Serial,
                threads,
                summary: None,
                speedup: None,
            });
        }

        for policy in PolicyKind::ALL.into_iter().filter(PolicyKind::is_concurrent) {
            for &threads in &thread_counts {
                rows.push(self.measure_row(policy, threads, samples, serial_mean)?);
            }
        }

        let skipped = rows.iter().filter(|r| r.is_skipped()).count();
        info!(
            "Sweep finished: {} row(s) measured, {} skipped",
            rows.len() - skipped,
            skipped
        );

        Ok(SweepReport {
            case,
            samples,
            rows,
        })
    }

    /// Sample one configuration; speedup is relative to `serial_mean`, or to
    /// the row itself when no baseline exists yet
    fn measure_row(
        &self,
        policy: PolicyKind,
        threads: usize,
        samples: usize,
        serial_mean: Option<f64>,
    ) -> Result<SweepRow> {
        info!(
            "Running {} with {} thread(s), {} samples",
            policy, threads, samples
        );
        let summary = self.sample(policy, threads, samples)?.summary();
        let baseline = serial_mean.unwrap_or(summary.mean_secs);

        Ok(SweepRow {
            policy,
            threads,
            summary: Some(summary),
            speedup: speedup(baseline, summary.mean_secs),
        })
    }

    /// Collect `samples` elapsed times for one configuration
    fn sample(&self, policy: PolicyKind, threads: usize, samples: usize) -> Result<SampleSeries> {
        let pb = self.progress_bar(policy, threads, samples);
        let mut series = SampleSeries::with_capacity(samples);
        for _ in 0..samples {
            let result = self.harness.run_once(policy, threads)?;
            series.push(result.elapsed);
            pb.inc(1);
        }
        pb.finish_and_clear();
        Ok(series)
    }

    fn progress_bar(&self, policy: PolicyKind, threads: usize, samples: usize) -> ProgressBar {
        if self.config.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(samples as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} samples")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message(format!("{} x{}", policy, threads));
        pb
    }

    fn reporter(&self) -> MetricsReporter {
        MetricsReporter::new(self.config.output_format)
    }

    /// Print the final report in the configured format
    pub fn report(&self, report: &BenchmarkReport) -> Result<()> {
        let reporter = self.reporter();
        match report {
            BenchmarkReport::Comparison(r) => reporter.report_comparison(r),
            BenchmarkReport::Sweep(r) => reporter.report_sweep(r),
        }
    }

    /// Export results to JSON file
    pub fn export_json(&self, report: &BenchmarkReport, path: &Path) -> Result<()> {
        self.reporter()
            .write_json(path, &self.config.summary(), report)
    }

    /// Export results to CSV file
    pub fn export_csv(&self, report: &BenchmarkReport, path: &Path) -> Result<()> {
        self.reporter().write_csv(path, report)
    }
}

/// Format throughput with thousands separators
pub fn format_throughput(throughput: f64) -> String {
    let value = throughput as u64;
    format_count(value)
}

/// Format large numbers with thousands separators
/// Examples: 1,234,567 or 987,654
pub fn format_count(value: u64) -> String {
    let s = value.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::OpMix;

    fn row(report: &SweepReport, policy: PolicyKind, threads: usize) -> Option<&SweepRow> {
        report
            .rows
            .iter()
            .find(|r| r.policy == policy && r.threads == threads)
    }

    fn quiet_sweep(case: WorkloadCase, n: usize, m: u64) -> Orchestrator {
        let config = BenchmarkConfig::sweep(case, n, m, 2)
            .unwrap()
            .with_seed(11)
            .quiet();
        Orchestrator::new(config)
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_throughput_truncates() {
        assert_eq!(format_throughput(12345.9), "12,345");
        assert_eq!(format_throughput(0.4), "0");
    }

    #[test]
    fn test_comparison_runs_all_policies() {
        let mix = OpMix::new(0.9, 0.05).unwrap();
        let config = BenchmarkConfig::comparison(200, 2000, 4, mix)
            .unwrap()
            .with_seed(1)
            .quiet();
        let orchestrator = Orchestrator::new(config);

        let report = orchestrator.run_comparison(4).unwrap();
        assert_eq!(report.serial.policy, PolicyKind::Serial);
        assert_eq!(report.serial.threads, 1);
        assert_eq!(report.mutex.threads, 4);
        assert_eq!(report.rwlock.policy, PolicyKind::RwLock);
        for run in report.runs() {
            assert_eq!(run.tally.total(), 2000);
        }
    }

    #[test]
    fn test_sweep_case_three_table_shape() {
        let config = BenchmarkConfig::sweep(WorkloadCase::WriteHeavy, 1000, 10_000, 5)
            .unwrap()
            .with_seed(3)
            .quiet();
        let orchestrator = Orchestrator::new(config);

        let report = match orchestrator.run().unwrap() {
            BenchmarkReport::Sweep(r) => r,
            other => panic!("unexpected report {:?}", other),
        };

        assert_eq!(report.rows.len(), 12);
        let skipped: Vec<_> = report.rows.iter().filter(|r| r.is_skipped()).collect();
        assert_eq!(skipped.len(), 3);
        assert!(skipped
            .iter()
            .all(|r| r.policy == PolicyKind::Serial && r.threads > 1));

        for row in report.rows.iter().filter(|r| !r.is_skipped()) {
            let summary = row.summary.unwrap();
            assert_eq!(summary.samples, 5);
            assert!(summary.mean_secs >= 0.0);
            assert!(summary.std_dev_secs.unwrap() >= 0.0);
        }

        let serial = row(&report, PolicyKind::Serial, 1).unwrap();
        assert!(serial.summary.is_some());
        assert!(row(&report, PolicyKind::Mutex, 8).unwrap().summary.is_some());
    }

    #[test]
    fn test_sweep_single_sample_has_no_std_dev() {
        let config = BenchmarkConfig::sweep(WorkloadCase::ReadMostly, 50, 500, 1)
            .unwrap()
            .quiet();
        let orchestrator = Orchestrator::new(config);
        let report = orchestrator
            .run_sweep(WorkloadCase::ReadMostly, 1, &[1, 2])
            .unwrap();

        assert_eq!(report.rows.len(), 6);
        let mutex = row(&report, PolicyKind::Mutex, 2).unwrap();
        assert_eq!(mutex.summary.unwrap().std_dev_secs, None);
    }

    #[test]
    fn test_sweep_without_one_thread_still_has_serial_baseline() {
        let orchestrator = quiet_sweep(WorkloadCase::ReadMostly, 100, 1000);
        let report = orchestrator
            .run_sweep(WorkloadCase::ReadMostly, 2, &[2, 4])
            .unwrap();

        // serial x1 measured, serial x2/x4 skipped, mutex and rwlock x2/x4
        assert_eq!(report.rows.len(), 7);
        let serial = row(&report, PolicyKind::Serial, 1).unwrap();
        assert_eq!(report.rows[0].policy, PolicyKind::Serial);
        assert!(serial.summary.is_some());
        assert!(row(&report, PolicyKind::Serial, 2).unwrap().is_skipped());
        assert!(row(&report, PolicyKind::Serial, 4).unwrap().is_skipped());

        for policy in [PolicyKind::Mutex, PolicyKind::RwLock] {
            for threads in [2, 4] {
                let r = row(&report, policy, threads).unwrap();
                assert!(r.summary.is_some());
                assert!(r.speedup.is_some(), "{} x{} has no speedup", policy, threads);
            }
        }
        assert!(row(&report, PolicyKind::Mutex, 1).is_none());
    }

    #[test]
    fn test_sweep_repeated_thread_counts_measured_once() {
        let orchestrator = quiet_sweep(WorkloadCase::ReadHeavy, 100, 1000);
        let report = orchestrator
            .run_sweep(WorkloadCase::ReadHeavy, 2, &[1, 1])
            .unwrap();

        assert_eq!(report.rows.len(), 3);
        let policies: Vec<_> = report.rows.iter().map(|r| (r.policy, r.threads)).collect();
        assert_eq!(
            policies,
            vec![
                (PolicyKind::Serial, 1),
                (PolicyKind::Mutex, 1),
                (PolicyKind::RwLock, 1)
            ]
        );
    }

    #[test]
    fn test_sweep_orders_thread_counts() {
        let orchestrator = quiet_sweep(WorkloadCase::WriteHeavy, 50, 500);
        let report = orchestrator
            .run_sweep(WorkloadCase::WriteHeavy, 2, &[4, 1, 2])
            .unwrap();

        let mutex: Vec<_> = report
            .rows
            .iter()
            .filter(|r| r.policy == PolicyKind::Mutex)
            .map(|r| r.threads)
            .collect();
        assert_eq!(mutex, vec![1, 2, 4]);
    }

    #[test]
    fn test_sweep_rejects_zero_thread_count() {
        let orchestrator = quiet_sweep(WorkloadCase::ReadHeavy, 10, 10);
        assert!(matches!(
            orchestrator.run_sweep(WorkloadCase::ReadHeavy, 1, &[0, 2]),
            Err(BenchmarkError::Config(_))
        ));
    }

    #[test]
    fn test_sweep_rejects_zero_samples() {
        let config = BenchmarkConfig::sweep(WorkloadCase::ReadHeavy, 10, 10, 1)
            .unwrap()
            .quiet();
        let orchestrator = Orchestrator::new(config);
        assert!(orchestrator
            .run_sweep(WorkloadCase::ReadHeavy, 0, &[1])
            .is_err());
    }
}
