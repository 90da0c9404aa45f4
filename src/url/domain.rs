use url::{Host, Url};

/// Extracts the registrable domain of a URL's host
///
/// The registrable domain is the public-suffix-aware "effective" domain
/// used to decide whether two URLs belong to the same site:
/// `www.example.co.uk` and `mail.example.co.uk` both map to
/// `example.co.uk`, while `example.com` and `notexample.com` stay distinct.
///
/// IP-address hosts have no registrable domain and are returned verbatim,
/// so an IP is only ever "same site" with itself. Hosts the public suffix
/// list cannot split (e.g. `localhost`) are also returned verbatim.
///
/// # Arguments
///
/// * `url` - The URL to extract the registrable domain from
///
/// # Returns
///
/// * `Some(String)` - The lowercase registrable domain
/// * `None` - If the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use mailsweep::url::registrable_domain;
///
/// let url = Url::parse("https://www.example.co.uk/path").unwrap();
/// assert_eq!(registrable_domain(&url), Some("example.co.uk".to_string()));
///
/// let url = Url::parse("http://192.168.0.1/admin").unwrap();
/// assert_eq!(registrable_domain(&url), Some("192.168.0.1".to_string()));
/// ```
pub fn registrable_domain(url: &Url) -> Option<String> {
    match url.host() {
        Some(Host::Domain(host)) => {
            let host = host.to_lowercase();
            let registrable = psl::domain_str(&host).map(|d| d.to_string());
            Some(registrable.unwrap_or(host))
        }
        // IPv4/IPv6 hosts are their own site
        Some(other) => Some(other.to_string()),
        None => None,
    }
}
