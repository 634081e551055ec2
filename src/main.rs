//! CLI entry point for the LEGO price report.
//!
//! Loads the product CSV, prints a sample of the loaded rows, and prints
//! average prices grouped by review difficulty.

use anyhow::Result;
use clap::Parser;
use lego_price_report::analyzers::aggregate::summarize_prices;
use lego_price_report::{
    loader::{DEFAULT_LINE_LIMIT, load_products},
    output::{DEFAULT_SAMPLE_SIZE, log_summary_json, write_sample, write_summary},
};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "lego_price_report")]
#[command(about = "Summarize LEGO set prices by review difficulty", long_about = None)]
struct Cli {
    /// CSV file with one product per line after the header
    #[arg(short, long, value_name = "FILE", default_value = "./lego_setsHB.csv")]
    input: PathBuf,

    /// Maximum number of well-formed rows to read
    #[arg(short, long, default_value_t = DEFAULT_LINE_LIMIT as u64, value_parser = clap::value_parser!(u64).range(1..))]
    limit: u64,

    /// Number of products to show in the sample section
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample: usize,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/lego_price_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("lego_price_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let limit = usize::try_from(cli.limit)?;

    info!(input = %cli.input.display(), limit, "Reading product data");
    let data = load_products(&cli.input, limit);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    write_sample(&mut out, &data, cli.sample)?;

    let summary = summarize_prices(&data.prices, &data.difficulties);
    log_summary_json(&summary)?;
    write_summary(&mut out, &summary)?;
    out.flush()?;

    Ok(())
}
