//! Worklist traversal over one site
//!
//! This module owns the crawl loop: an explicit depth-first stack over
//! same-site URLs, bounded by the page budget, with the visited-set and
//! budget checks applied before a link is ever admitted. The original
//! design recursed per link; the explicit worklist removes any dependence
//! on call-stack depth.

use crate::config::Config;
use crate::crawler::extractor::{extract_emails, extract_links, visible_text};
use crate::crawler::fetcher::{fetch_page, FetchOutcome, SkipReason};
use crate::url::{assess_link, prepare_seed, registrable_domain, LinkVerdict};
use chrono::{DateTime, Utc};
use reqwest::Client;
use scraper::Html;
use std::collections::{BTreeSet, HashSet};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use url::Url;

/// Outcome of one crawl run
///
/// `emails` is the deliverable: distinct addresses in ascending
/// lexicographic order. The rest is diagnostics; callers that only ever
/// look at `emails` cannot tell "site had none" from "site was down",
/// which is the intended contract.
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Distinct email addresses found, sorted ascending
    pub emails: Vec<String>,

    /// Number of pages actually fetched (attempts, successful or not)
    pub pages_visited: usize,

    /// Pages that contributed nothing, with the reason for each
    pub skipped: Vec<PageSkip>,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Wall-clock duration of the run
    pub elapsed: Duration,

    /// True if the run was cut short by cancellation
    pub cancelled: bool,
}

/// One page that contributed nothing to a run
#[derive(Debug, Clone)]
pub struct PageSkip {
    /// The page URL
    pub url: String,

    /// Why it was skipped
    pub reason: SkipReason,
}

/// Mutable state of one crawl run
///
/// Created fresh per run and owned exclusively by it, so concurrent runs
/// never share anything but the network.
struct CrawlState {
    /// Every URL ever admitted to the traversal (fetched or queued).
    /// Membership gates re-visiting; size gates the budget.
    visited: HashSet<String>,

    /// Distinct email-like strings discovered so far, across all pages
    found: BTreeSet<String>,

    /// Registrable domain the traversal must stay within
    base_domain: String,

    /// Maximum number of distinct URLs that may ever be admitted
    budget: usize,
}

/// Runs one complete traversal
///
/// # Budget rule
///
/// The seed is admitted unconditionally and counts toward the budget; a
/// discovered link is admitted only while fewer than `max-pages` URLs have
/// been admitted. Admission happens exactly once per URL (insertion into
/// `visited`), so cyclic link graphs can neither cause re-visits nor burn
/// budget twice.
///
/// This function is total: it always produces a report and never
/// propagates an error. A seed that cannot be parsed into scheme + host
/// yields an empty report.
pub(crate) async fn run_traversal(
    client: &Client,
    config: &Config,
    seed: &str,
    cancel: &CancellationToken,
) -> CrawlReport {
    let started_at = Utc::now();
    let clock = Instant::now();

    let mut report = CrawlReport {
        emails: Vec::new(),
        pages_visited: 0,
        skipped: Vec::new(),
        started_at,
        elapsed: Duration::ZERO,
        cancelled: false,
    };

    let Some(seed_url) = prepare_seed(seed) else {
        tracing::warn!("Cannot derive a crawlable URL from '{}', nothing to do", seed);
        report.elapsed = clock.elapsed();
        return report;
    };

    // prepare_seed guarantees a host, so this cannot miss
    let Some(base_domain) = registrable_domain(&seed_url) else {
        report.elapsed = clock.elapsed();
        return report;
    };

    tracing::info!(
        "Crawling {} (site: {}, budget: {} pages)",
        seed_url,
        base_domain,
        config.crawler.max_pages
    );

    let mut state = CrawlState {
        visited: HashSet::from([seed_url.to_string()]),
        found: BTreeSet::new(),
        base_domain,
        budget: config.crawler.max_pages,
    };

    let delay = Duration::from_millis(config.crawler.politeness_delay_ms);
    let mut stack = vec![seed_url];

    while let Some(page_url) = stack.pop() {
        let outcome = tokio::select! {
            // Cancellation is checked first so an already-cancelled token
            // stops the run before the next request leaves the machine
            biased;
            _ = cancel.cancelled() => {
                tracing::info!("Crawl cancelled after {} page(s)", report.pages_visited);
                report.cancelled = true;
                break;
            }
            outcome = paced_fetch(client, &page_url, delay) => outcome,
        };

        report.pages_visited += 1;

        match outcome {
            FetchOutcome::Html { body } => {
                tracing::debug!("Fetched {} ({} bytes)", page_url, body.len());
                let admitted = process_page(&body, &page_url, &mut state, config);

                // Depth-first: the current page's links go on top of the
                // stack, reversed so the first link on the page pops first
                for link in admitted.into_iter().rev() {
                    stack.push(link);
                }
            }
            FetchOutcome::Skipped { reason } => {
                tracing::warn!("Skipping {}: {}", page_url, reason);
                report.skipped.push(PageSkip {
                    url: page_url.to_string(),
                    reason,
                });
            }
        }
    }

    report.emails = state.found.into_iter().collect();
    report.elapsed = clock.elapsed();

    tracing::info!(
        "Crawl finished: {} page(s) visited, {} email(s) found, {} skipped",
        report.pages_visited,
        report.emails.len(),
        report.skipped.len()
    );

    report
}

/// Politeness pause, then the fetch
async fn paced_fetch(client: &Client, url: &Url, delay: Duration) -> FetchOutcome {
    tokio::time::sleep(delay).await;
    fetch_page(client, url).await
}

/// Digests one fetched page: merge its emails, admit its eligible links
///
/// Returns the admitted links in page order. Parsing stays in this
/// synchronous helper so the HTML document never lives across an await
/// point.
fn process_page(body: &str, page_url: &Url, state: &mut CrawlState, config: &Config) -> Vec<Url> {
    let document = Html::parse_document(body);

    let emails = extract_emails(&visible_text(&document));
    if !emails.is_empty() {
        tracing::info!("{}: {} email(s)", page_url, emails.len());
    }
    state.found.extend(emails);

    let mut admitted = Vec::new();
    for link in extract_links(&document, page_url) {
        if state.visited.len() >= state.budget {
            tracing::debug!("Page budget reached, ignoring remaining links");
            break;
        }

        match assess_link(&link, &state.base_domain, &config.filter.denied_hosts) {
            LinkVerdict::Follow => {
                if state.visited.insert(link.to_string()) {
                    admitted.push(link);
                }
            }
            verdict => {
                tracing::trace!("Not following {}: {:?}", link, verdict);
            }
        }
    }

    admitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::build_http_client;

    fn quick_config() -> Config {
        let mut config = Config::default();
        config.crawler.politeness_delay_ms = 0;
        config.crawler.request_timeout_secs = 2;
        config
    }

    #[tokio::test]
    async fn test_unparseable_seed_yields_empty_report() {
        let config = quick_config();
        let client = build_http_client(&config.crawler).unwrap();

        for seed in ["", "   ", "http://", "ftp://example.com"] {
            let report =
                run_traversal(&client, &config, seed, &CancellationToken::new()).await;
            assert!(report.emails.is_empty(), "seed {:?}", seed);
            assert_eq!(report.pages_visited, 0, "seed {:?}", seed);
            assert!(!report.cancelled);
        }
    }

    #[tokio::test]
    async fn test_pre_cancelled_run_visits_nothing() {
        let config = quick_config();
        let client = build_http_client(&config.crawler).unwrap();

        let cancel = CancellationToken::new();
        cancel.cancel();

        let report = run_traversal(&client, &config, "example.com", &cancel).await;
        assert!(report.cancelled);
        assert_eq!(report.pages_visited, 0);
        assert!(report.emails.is_empty());
    }

    // Traversal behavior against real responses (budgets, cycles, skip
    // asymmetry) is covered by the wiremock tests in tests/crawl_tests.rs
}
