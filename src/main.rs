//! Site-Harvest main entry point
//!
//! Command-line interface for crawling one site into page records or
//! retrieval-ready text chunks.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use site_harvest::chunk::chunk_pages;
use site_harvest::config::{load_config, CrawlerConfig};
use site_harvest::crawler::{CrawlReport, Crawler};
use site_harvest::output::{print_summary, write_chunks_jsonl, write_pages_jsonl};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Harvest: a bounded same-origin crawler
///
/// Crawls the pages of one site depth-first from a seed URL and writes the
/// collected text as JSON Lines: whole pages, or overlapping chunks ready
/// for a retrieval index.
#[derive(Parser, Debug)]
#[command(name = "site-harvest")]
#[command(version)]
#[command(about = "Crawl one site into retrievable text chunks", long_about = None)]
struct Cli {
    /// Seed URL the crawl starts from
    #[arg(value_name = "SEED_URL")]
    seed: String,

    /// Maximum number of pages to collect (0 = unlimited)
    #[arg(short = 'n', long, value_name = "N")]
    max_pages: Option<usize>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CSS selector for page content elements
    #[arg(long, value_name = "SELECTOR")]
    selector: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Chunk window length in characters
    #[arg(long, value_name = "CHARS")]
    chunk_size: Option<usize>,

    /// Characters shared between consecutive chunks
    #[arg(long, value_name = "CHARS")]
    chunk_overlap: Option<usize>,

    /// Write JSON Lines to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// What to emit
    #[arg(long, value_enum, default_value = "chunks")]
    format: Format,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Output record shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One JSON object per fetched page
    Pages,
    /// One JSON object per chunk window
    Chunks,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    let crawler = Crawler::new(config).context("failed to initialize crawler")?;
    let report = crawler
        .crawl(&cli.seed)
        .await
        .with_context(|| format!("crawl of {} failed", cli.seed))?;

    write_output(&cli, crawler.config(), &report)?;

    // The summary shares stdout with the data when no output file is given,
    // so it only prints when the data went elsewhere
    if cli.output.is_some() && !cli.quiet {
        print_summary(&report);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_harvest=info,warn"),
            1 => EnvFilter::new("site_harvest=debug,info"),
            2 => EnvFilter::new("site_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds the effective configuration: file values first, flags on top
fn build_config(cli: &Cli) -> anyhow::Result<CrawlerConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CrawlerConfig::default(),
    };

    if let Some(max_pages) = cli.max_pages {
        config.max_pages = max_pages;
    }
    if let Some(selector) = &cli.selector {
        config.content_selector = selector.clone();
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.fetch_timeout_secs = timeout_secs;
    }
    if let Some(chunk_size) = cli.chunk_size {
        config.chunking.chunk_size = chunk_size;
    }
    if let Some(chunk_overlap) = cli.chunk_overlap {
        config.chunking.chunk_overlap = chunk_overlap;
    }

    Ok(config)
}

/// Writes the crawl results as JSON Lines to the chosen destination
fn write_output(cli: &Cli, config: &CrawlerConfig, report: &CrawlReport) -> anyhow::Result<()> {
    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            emit(cli.format, config, report, &mut writer)?;
            writer.flush()?;
            tracing::info!("Wrote output to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            emit(cli.format, config, report, &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Serializes the report in the requested shape
fn emit<W: Write>(
    format: Format,
    config: &CrawlerConfig,
    report: &CrawlReport,
    writer: &mut W,
) -> anyhow::Result<()> {
    match format {
        Format::Pages => {
            tracing::info!("Writing {} page records", report.pages.len());
            write_pages_jsonl(writer, &report.pages)?;
        }
        Format::Chunks => {
            let chunks = chunk_pages(&report.pages, &config.chunking);
            tracing::info!(
                "Writing {} chunks from {} pages",
                chunks.len(),
                report.pages.len()
            );
            write_chunks_jsonl(writer, &chunks)?;
        }
    }
    Ok(())
}
