//! Metrics reporter - output formatting and export
//!
//! Supports multiple output formats:
//! - Text (human-readable)
//! - JSON
//! - CSV

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::benchmark::harness::RunResult;
use crate::benchmark::orchestrator::{
    format_throughput, BenchmarkReport, ComparisonReport, SweepReport,
};
use crate::config::{BenchmarkConfig, BenchmarkMode, OutputFormat};
use crate::metrics::stats::speedup;
use crate::policy::PolicyKind;
use crate::utils::Result;

/// Metrics reporter
pub struct MetricsReporter {
    format: OutputFormat,
}

impl MetricsReporter {
    /// Create new reporter with specified format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print the configuration block ahead of the runs (text only)
    pub fn print_header(&self, config: &BenchmarkConfig) {
        if self.format == OutputFormat::Text {
            print!("{}", render_header(config));
        }
    }

    /// Print one comparison phase as soon as it finishes (text only)
    ///
    /// `earlier` holds the runs that completed before this one, in order.
    pub fn print_phase(&self, result: &RunResult, earlier: &[RunResult]) {
        if self.format == OutputFormat::Text {
            print!("{}", render_phase(result, earlier));
        }
    }

    /// Report a fixed single-run comparison to stdout
    pub fn report_comparison(&self, report: &ComparisonReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => print!("{}", render_comparison_summary(report)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
            OutputFormat::Csv => print!("{}", comparison_csv(report)),
        }
        Ok(())
    }

    /// Report a statistical sweep to stdout
    pub fn report_sweep(&self, report: &SweepReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => print!("{}", render_sweep_table(report)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
            OutputFormat::Csv => print!("{}", sweep_csv(report)),
        }
        Ok(())
    }

    /// Write results to JSON file
    pub fn write_json(
        &self,
        path: &Path,
        config_summary: &str,
        report: &BenchmarkReport,
    ) -> Result<()> {
        let json = to_json(config_summary, report)?;
        let mut file = File::create(path)?;
        writeln!(file, "{}", serde_json::to_string_pretty(&json)?)?;
        Ok(())
    }

    /// Write results to CSV file
    pub fn write_csv(&self, path: &Path, report: &BenchmarkReport) -> Result<()> {
        let body = match report {
            BenchmarkReport::Comparison(r) => comparison_csv(r),
            BenchmarkReport::Sweep(r) => sweep_csv(r),
        };
        let mut file = File::create(path)?;
        file.write_all(body.as_bytes())?;
        Ok(())
    }
}

/// Export document: config summary plus the mode's report
pub fn to_json(config_summary: &str, report: &BenchmarkReport) -> Result<serde_json::Value> {
    let (mode, results) = match report {
        BenchmarkReport::Comparison(r) => ("run", serde_json::to_value(r)?),
        BenchmarkReport::Sweep(r) => ("sweep", serde_json::to_value(r)?),
    };
    Ok(serde_json::json!({
        "config": config_summary,
        "mode": mode,
        "results": results,
    }))
}

fn render_header(config: &BenchmarkConfig) -> String {
    let mut out = String::new();
    match &config.mode {
        BenchmarkMode::Comparison { threads } => {
            let _ = writeln!(out, "Configuration:");
            let _ = writeln!(out, "Initial elements (n): {}", config.initial_size);
            let _ = writeln!(out, "Total operations (m): {}", config.total_ops);
            let _ = writeln!(out, "Number of threads: {}", threads);
            let _ = writeln!(out, "Member fraction: {:.2}", config.mix.member());
            let _ = writeln!(out, "Insert fraction: {:.2}", config.mix.insert());
            let _ = writeln!(out, "Delete fraction: {:.2}", config.mix.delete());
        }
        BenchmarkMode::Sweep { case, samples, .. } => {
            let _ = writeln!(out, "Performance Testing - {}", case);
            let _ = writeln!(
                out,
                "n = {}, m = {}, samples = {}",
                config.initial_size, config.total_ops, samples
            );
            let _ = writeln!(
                out,
                "Member: {:.1}%, Insert: {:.1}%, Delete: {:.1}%",
                config.mix.member() * 100.0,
                config.mix.insert() * 100.0,
                config.mix.delete() * 100.0
            );
        }
    }
    out.push('\n');
    out
}

fn render_phase(result: &RunResult, earlier: &[RunResult]) -> String {
    let label = match result.policy {
        PolicyKind::Serial => "Serial",
        PolicyKind::Mutex => "Mutex",
        PolicyKind::RwLock => "Read-write lock",
    };
    let secs = result.elapsed_secs();

    let mut out = String::new();
    let _ = writeln!(out, "=== {} Implementation ===", result.policy);
    let _ = writeln!(out, "Initial list size: {}", result.initial_len);
    let _ = writeln!(out, "{} execution time: {:.6} seconds", label, secs);
    let _ = writeln!(
        out,
        "Throughput: {} ops/sec",
        format_throughput(result.throughput())
    );
    let _ = writeln!(out, "Final list size: {}", result.final_len);
    for base in earlier {
        let _ = writeln!(
            out,
            "Speedup over {}: {}",
            base.policy.as_str().to_lowercase(),
            format_speedup(speedup(base.elapsed_secs(), secs))
        );
    }
    out.push('\n');
    out
}

fn render_comparison_summary(report: &ComparisonReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Performance Summary ===");
    let _ = writeln!(
        out,
        "Serial time:     {:.6} seconds",
        report.serial.elapsed_secs()
    );
    let _ = writeln!(
        out,
        "Mutex time:      {:.6} seconds ({} speedup)",
        report.mutex.elapsed_secs(),
        format_speedup(report.mutex_speedup())
    );
    let _ = writeln!(
        out,
        "RW-Lock time:    {:.6} seconds ({} speedup)",
        report.rwlock.elapsed_secs(),
        format_speedup(report.rwlock_speedup())
    );
    let _ = writeln!(
        out,
        "RW-Lock vs Mutex: {}",
        format_speedup(report.rwlock_over_mutex())
    );
    out
}

fn render_sweep_table(report: &SweepReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Implementation\tThreads\tAverage (s)\tStd Dev (s)\tSpeedup"
    );
    let _ = writeln!(out, "{}", "=".repeat(63));
    for row in &report.rows {
        match &row.summary {
            Some(summary) => {
                let std_dev = summary
                    .std_dev_secs
                    .map_or_else(|| "-".to_string(), |sd| format!("{:.6}", sd));
                let _ = writeln!(
                    out,
                    "{}\t\t{}\t{:.6}\t{}\t{}",
                    row.policy,
                    row.threads,
                    summary.mean_secs,
                    std_dev,
                    format_speedup(row.speedup)
                );
            }
            None => {
                let _ = writeln!(out, "{}\t\t{}\t-\t\t-\t\t-", row.policy, row.threads);
            }
        }
    }
    out
}

fn format_speedup(speedup: Option<f64>) -> String {
    speedup.map_or_else(|| "-".to_string(), |s| format!("{:.2}x", s))
}

fn comparison_csv(report: &ComparisonReport) -> String {
    let mut out = String::from(
        "policy,threads,elapsed_secs,throughput,\
         member_ops,insert_ops,delete_ops,initial_len,final_len,speedup\n",
    );
    let serial_secs = report.serial.elapsed_secs();
    let speedups = [
        speedup(serial_secs, serial_secs),
        report.mutex_speedup(),
        report.rwlock_speedup(),
    ];
    for (run, ratio) in report.runs().into_iter().zip(speedups) {
        let _ = writeln!(
            out,
            "{},{},{:.6},{:.2},{},{},{},{},{},{}",
            csv_policy(run.policy),
            run.threads,
            run.elapsed_secs(),
            run.throughput(),
            run.tally.member,
            run.tally.insert,
            run.tally.delete,
            run.initial_len,
            run.final_len,
            csv_opt(ratio, 4)
        );
    }
    out
}

fn sweep_csv(report: &SweepReport) -> String {
    let mut out = String::from("case,policy,threads,samples,mean_secs,std_dev_secs,speedup\n");
    for row in &report.rows {
        let (samples, mean, std_dev) = match &row.summary {
            Some(s) => (
                s.samples.to_string(),
                csv_opt(Some(s.mean_secs), 6),
                csv_opt(s.std_dev_secs, 6),
            ),
            None => (String::new(), String::new(), String::new()),
        };
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            report.case.number(),
            csv_policy(row.policy),
            row.threads,
            samples,
            mean,
            std_dev,
            csv_opt(row.speedup, 4)
        );
    }
    out
}

fn csv_policy(policy: PolicyKind) -> &'static str {
    match policy {
        PolicyKind::Serial => "serial",
        PolicyKind::Mutex => "mutex",
        PolicyKind::RwLock => "rwlock",
    }
}

fn csv_opt(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(String::new, |v| format!("{:.*}", precision, v))
}
