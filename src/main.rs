//! Mailsweep main entry point
//!
//! Command-line interface for the mailsweep email harvester.

use clap::Parser;
use mailsweep::config::{load_config_with_hash, Config};
use mailsweep::Crawler;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Mailsweep: a polite same-site email harvester
///
/// Mailsweep walks the pages of a single website, staying within its
/// registrable domain and a fixed page budget, and prints every distinct
/// email address published in the pages' text.
#[derive(Parser, Debug)]
#[command(name = "mailsweep")]
#[command(version = "1.0.0")]
#[command(about = "Collect email addresses published on a website", long_about = None)]
struct Cli {
    /// Website to crawl (scheme optional; http:// is assumed)
    #[arg(value_name = "URL")]
    url: String,

    /// Maximum number of pages to visit, seed included
    #[arg(short, long, value_name = "N")]
    pages: Option<usize>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(pages) = cli.pages {
        config.crawler.max_pages = pages;
    }

    let crawler = Crawler::new(config)?;

    // Ctrl-C stops at the next page boundary instead of discarding the run
    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, wrapping up");
            interrupt.cancel();
        }
    });

    let report = crawler.run_with_cancel(&cli.url, &cancel).await;

    for email in &report.emails {
        println!("{}", email);
    }

    tracing::info!(
        "{} email(s) from {} page(s) in {:.1}s{}",
        report.emails.len(),
        report.pages_visited,
        report.elapsed.as_secs_f64(),
        if report.cancelled { " (interrupted)" } else { "" }
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("mailsweep=info,warn"),
            1 => EnvFilter::new("mailsweep=debug,info"),
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
