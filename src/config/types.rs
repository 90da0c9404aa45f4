use serde::Deserialize;

/// Default User-Agent header sent with every request
///
/// A browser-like string: some sites serve stripped-down or empty pages to
/// anything that identifies itself as a bot.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Hosts that are never followed, matched as a substring of the candidate URL
pub const DEFAULT_DENIED_HOSTS: &[&str] = &[
    "facebook.com",
    "twitter.com",
    "linkedin.com",
    "instagram.com",
];

/// Main configuration structure for mailsweep
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of distinct pages a single run may visit, seed included
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Pause before each outbound fetch (milliseconds)
    #[serde(rename = "politeness-delay-ms")]
    pub politeness_delay_ms: u64,

    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: 10,
            request_timeout_secs: 10,
            politeness_delay_ms: 1000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Link filtering configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Deny-listed hosts; a candidate URL containing any of these as a
    /// substring is never followed. Intentionally coarse.
    #[serde(rename = "denied-hosts")]
    pub denied_hosts: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            denied_hosts: DEFAULT_DENIED_HOSTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
