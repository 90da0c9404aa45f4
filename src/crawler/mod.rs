//! Crawler module for page fetching and email harvesting
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with per-page outcome classification
//! - Email and link extraction from HTML
//! - The budgeted, same-site worklist traversal

mod extractor;
mod fetcher;
mod traversal;

pub use extractor::{extract_emails, extract_links, visible_text};
pub use fetcher::{build_http_client, fetch_page, FetchOutcome, SkipReason};
pub use traversal::{CrawlReport, PageSkip};

use crate::config::Config;
use crate::Result;
use reqwest::Client;
use tokio_util::sync::CancellationToken;

/// A configured email crawler
///
/// One `Crawler` can serve any number of runs. Each run owns its own
/// state, so concurrent runs on the same instance are fully independent;
/// the only shared resource is the HTTP client's connection pool.
pub struct Crawler {
    client: Client,
    config: Config,
}

impl Crawler {
    /// Creates a crawler from a configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(SweepError)` - HTTP client construction failed
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client(&config.crawler)?;
        Ok(Self { client, config })
    }

    /// Crawls the site rooted at `seed` and reports what was found
    ///
    /// This call is total: a malformed seed, an unreachable site, or a
    /// budget spent on dead pages all degrade to an empty (or partial)
    /// report, never an error.
    pub async fn run(&self, seed: &str) -> CrawlReport {
        self.run_with_cancel(seed, &CancellationToken::new()).await
    }

    /// Like [`run`](Self::run), but stops at the next page boundary once
    /// `cancel` fires, returning everything found up to that point
    pub async fn run_with_cancel(&self, seed: &str, cancel: &CancellationToken) -> CrawlReport {
        traversal::run_traversal(&self.client, &self.config, seed, cancel).await
    }
}

/// Crawls `seed` with default settings and a page budget of `page_budget`
///
/// The entry point for callers that only want the addresses: the returned
/// vector is deduplicated and sorted ascending, ready to be persisted and
/// counted against a quota. Setup failures are logged and degrade to an
/// empty result, preserving the never-raises contract end to end.
///
/// # Example
///
/// ```no_run
/// # async fn example() {
/// let emails = mailsweep::crawl("example.com", 10).await;
/// for email in &emails {
///     println!("{}", email);
/// }
/// # }
/// ```
pub async fn crawl(seed: &str, page_budget: usize) -> Vec<String> {
    let mut config = Config::default();
    config.crawler.max_pages = page_budget;

    match Crawler::new(config) {
        Ok(crawler) => crawler.run(seed).await.emails,
        Err(e) => {
            tracing::error!("Failed to set up crawler: {}", e);
            Vec::new()
        }
    }
}
