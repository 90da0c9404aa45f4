//! URL handling module for mailsweep
//!
//! This module provides seed preparation, public-suffix-aware registrable
//! domain extraction, and the link eligibility check that keeps a crawl on
//! one site.

mod domain;
mod normalize;

// Re-export main functions
pub use domain::registrable_domain;
pub use normalize::{normalize_candidate, prepare_seed};

/// Verdict for a discovered link
///
/// Everything except `Follow` is a filtering decision, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkVerdict {
    /// Same site, allowed scheme, not deny-listed
    Follow,
    /// Scheme is not http or https
    BadScheme,
    /// URL matches an entry of the deny-list
    DeniedHost,
    /// Registrable domain differs from the crawl's base domain
    OffSite,
}

impl LinkVerdict {
    /// Returns true if the link should enter the crawl frontier
    pub fn should_follow(&self) -> bool {
        matches!(self, Self::Follow)
    }
}

/// Decides whether a discovered link belongs to the crawl
///
/// Checks, in order: the scheme must be http or https, the URL must not
/// contain any deny-listed host as a substring (deliberately coarse, so
/// `facebook.com` also catches `m.facebook.com` and share links), and the
/// URL's registrable domain must equal `base_domain`.
///
/// # Examples
///
/// ```
/// use mailsweep::url::{assess_link, LinkVerdict};
/// use url::Url;
///
/// let link = Url::parse("https://blog.example.com/contact").unwrap();
/// let verdict = assess_link(&link, "example.com", &[]);
/// assert_eq!(verdict, LinkVerdict::Follow);
/// ```
pub fn assess_link(candidate: &url::Url, base_domain: &str, denied_hosts: &[String]) -> LinkVerdict {
    if candidate.scheme() != "http" && candidate.scheme() != "https" {
        return LinkVerdict::BadScheme;
    }

    let url_str = candidate.as_str();
    if denied_hosts.iter().any(|host| url_str.contains(host.as_str())) {
        return LinkVerdict::DeniedHost;
    }

    match registrable_domain(candidate) {
        Some(domain) if domain == base_domain => LinkVerdict::Follow,
        _ => LinkVerdict::OffSite,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn denied() -> Vec<String> {
        vec![
            "facebook.com".to_string(),
            "twitter.com".to_string(),
            "linkedin.com".to_string(),
            "instagram.com".to_string(),
        ]
    }

    #[test]
    fn test_same_domain_followed() {
        let link = Url::parse("https://example.com/about").unwrap();
        assert_eq!(
            assess_link(&link, "example.com", &denied()),
            LinkVerdict::Follow
        );
    }

    #[test]
    fn test_subdomain_followed() {
        let link = Url::parse("https://mail.example.co.uk/contact").unwrap();
        assert_eq!(
            assess_link(&link, "example.co.uk", &denied()),
            LinkVerdict::Follow
        );
    }

    #[test]
    fn test_off_site_rejected() {
        let link = Url::parse("https://evil.com/").unwrap();
        assert_eq!(
            assess_link(&link, "example.com", &denied()),
            LinkVerdict::OffSite
        );
    }

    #[test]
    fn test_similar_name_not_conflated() {
        let link = Url::parse("https://notexample.com/").unwrap();
        assert_eq!(
            assess_link(&link, "example.com", &denied()),
            LinkVerdict::OffSite
        );
    }

    #[test]
    fn test_denied_host_rejected() {
        let link = Url::parse("https://facebook.com/somepage").unwrap();
        assert_eq!(
            assess_link(&link, "facebook.com", &denied()),
            LinkVerdict::DeniedHost
        );
    }

    #[test]
    fn test_denied_host_substring_is_coarse() {
        // The share-link case the coarse match is there for
        let link = Url::parse("https://example.com/share?u=https://twitter.com/x").unwrap();
        assert_eq!(
            assess_link(&link, "example.com", &denied()),
            LinkVerdict::DeniedHost
        );
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let link = Url::parse("ftp://example.com/files").unwrap();
        assert_eq!(
            assess_link(&link, "example.com", &denied()),
            LinkVerdict::BadScheme
        );
    }

    #[test]
    fn test_should_follow() {
        assert!(LinkVerdict::Follow.should_follow());
        assert!(!LinkVerdict::BadScheme.should_follow());
        assert!(!LinkVerdict::DeniedHost.should_follow());
        assert!(!LinkVerdict::OffSite.should_follow());
    }
}
