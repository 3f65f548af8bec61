//! list-lock-bench - linked-list set throughput under different locks
//!
//! Runs the same randomized member/insert/delete workload against an
//! unsynchronized list, a mutex-guarded list and a reader-writer-locked
//! list, and reports elapsed times and speedups.

use anyhow::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use list_lock_bench::benchmark::Orchestrator;
use list_lock_bench::config::{BenchmarkConfig, CliArgs, OutputFormat};
use list_lock_bench::metrics::MetricsReporter;

fn setup_logging(verbose: bool, quiet: bool) -> Result<()> {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Logs on stderr, reports on stdout
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn print_banner(config: &BenchmarkConfig) {
    if config.quiet || config.output_format != OutputFormat::Text {
        return;
    }

    println!("list-lock-bench v{}", env!("CARGO_PKG_VERSION"));
    println!("====================================");
    MetricsReporter::new(config.output_format).print_header(config);
}

fn run(args: CliArgs) -> Result<()> {
    // Build configuration
    let config = BenchmarkConfig::from_cli(&args)?;
    info!("{}", config.summary());

    // Print banner
    print_banner(&config);

    let orchestrator = Orchestrator::new(config.clone());
    let report = orchestrator.run()?;
    orchestrator.report(&report)?;

    // Export to JSON if requested
    if let Some(ref output_path) = config.output_path {
        info!("Writing results to: {:?}", output_path);
        orchestrator.export_json(&report, output_path)?;
    }

    // Export to CSV if requested
    if let Some(ref csv_path) = config.csv_output {
        info!("Writing CSV to: {:?}", csv_path);
        orchestrator.export_csv(&report, csv_path)?;
    }

    Ok(())
}

fn main() {
    let args = match CliArgs::parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(CliArgs::exit_code(&e));
        }
    };

    if let Err(e) = setup_logging(args.verbose, args.quiet) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
