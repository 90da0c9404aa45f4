use url::Url;

/// Prepares a caller-supplied seed string for crawling
///
/// Users paste anything into the form this feeds from: full URLs, bare
/// hosts, or garbage. The rules are:
///
/// 1. Trim whitespace; an empty string yields `None`
/// 2. If the string already parses as an absolute http(s) URL, use it
/// 3. Otherwise prepend `http://` and try again
/// 4. The result must have a host
///
/// A seed that cannot be turned into a crawlable URL is a recoverable
/// outcome, not an error, hence `Option` rather than `Result`.
///
/// # Examples
///
/// ```
/// use mailsweep::url::prepare_seed;
///
/// let url = prepare_seed("example.com").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/");
///
/// assert!(prepare_seed("").is_none());
/// ```
pub fn prepare_seed(raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let url = match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url,
        // A seed that spells out some other scheme is a lost cause; only
        // scheme-less input gets the http:// fallback. Note "example.com:8080"
        // lands here too (it parses as scheme "example.com").
        _ if raw.contains("://") => return None,
        _ => Url::parse(&format!("http://{}", raw)).ok()?,
    };

    url.host_str()?;
    Some(normalize_candidate(url))
}

/// Normalizes a URL for visited-set membership
///
/// Fragments never change the fetched document, so `/page` and `/page#team`
/// must count as one visit.
pub fn normalize_candidate(mut url: Url) -> Url {
    url.set_fragment(None);
    url
}
