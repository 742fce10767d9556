//! Entropy Classifier CLI
//!
//! Classifies files as normal, compressed or encrypted and prints one
//! report per file followed by a summary.

use clap::Parser;
use entropy_classifier::{
    analysis::{Classification, EntropyClassifier},
    config::{FileConfig, OutputFormat},
    metrics::MetricsRegistry,
    scan::{collect_files, FileReport, ScanSummary, Scanner},
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files or directories to classify
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Descend into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Worker threads (0 = one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write Prometheus metrics to this file when done
    #[arg(long)]
    metrics: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    info!("Entropy Classifier v{}", entropy_classifier::VERSION);

    let mut config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };
    if cli.recursive {
        config.scan.recursive = true;
    }
    if let Some(threads) = cli.threads {
        config.scan.threads = threads;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    let classifier = match EntropyClassifier::new(config.thresholds) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid thresholds: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        entropy_cut_off = config.thresholds.entropy_cut_off,
        block_size = config.thresholds.block_size.get(),
        sd_cut_off = config.thresholds.sd_cut_off,
        "Classifier configured"
    );

    let files = collect_files(&cli.paths, config.scan.recursive);

    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = Arc::clone(&cancel);
        if let Err(e) = ctrlc::set_handler(move || {
            cancel.store(true, Ordering::Relaxed);
        }) {
            warn!("Could not install interrupt handler: {}", e);
        }
    }

    let metrics = match cli.metrics.as_ref().map(|_| MetricsRegistry::new()).transpose() {
        Ok(metrics) => metrics.map(Arc::new),
        Err(e) => {
            eprintln!("Failed to create metrics registry: {}", e);
            std::process::exit(1);
        }
    };

    let mut scanner = match Scanner::new(classifier).with_threads(config.scan.threads) {
        Ok(scanner) => scanner.with_cancel_flag(Arc::clone(&cancel)),
        Err(e) => {
            eprintln!("Failed to start scanner: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(metrics) = &metrics {
        scanner = scanner.with_metrics(Arc::clone(metrics));
    }

    info!("Classifying {} files...", files.len());
    let summary = scanner.scan(&files);

    for report in &summary.reports {
        print_report(report, config.output.format);
    }
    print_summary(&summary, config.output.format);

    if let (Some(path), Some(metrics)) = (&cli.metrics, &metrics) {
        match metrics.encode() {
            Ok(output) => {
                if let Err(e) = std::fs::write(path, output) {
                    warn!("Failed to write metrics to {}: {}", path.display(), e);
                }
            }
            Err(e) => warn!("Failed to encode metrics: {}", e),
        }
    }

    if summary.interrupted {
        warn!(
            "Interrupted: {} of {} files classified",
            summary.reports.len(),
            files.len()
        );
        std::process::exit(130);
    }
}

fn print_report(report: &FileReport, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!(
                "{:<10}  {:>6.4}  {:>6.4}  {}{}",
                report.classification(),
                report.result.entropy,
                report.result.standard_deviation,
                report.path.display(),
                if report.readable { "" } else { "  (no data)" }
            );
        }
        OutputFormat::Json => match serde_json::to_string(report) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!("Failed to serialize report for {}: {}", report.path.display(), e),
        },
    }
}

fn print_summary(summary: &ScanSummary, format: OutputFormat) {
    let counts = Classification::ALL
        .iter()
        .map(|&class| format!("{} {}", summary.count(class), class))
        .collect::<Vec<_>>()
        .join(", ");

    match format {
        OutputFormat::Text => println!(
            "\n{} files ({} unreadable): {}",
            summary.reports.len(),
            summary.unreadable(),
            counts
        ),
        OutputFormat::Json => info!(
            files = summary.reports.len(),
            unreadable = summary.unreadable(),
            "{}",
            counts
        ),
    }
}
