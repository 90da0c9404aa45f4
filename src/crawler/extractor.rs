//! Email and link extraction from fetched HTML
//!
//! This module turns a page body into the two things the traversal needs:
//! the set of email-like strings in its visible text, and the outbound
//! links in document order.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Node, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Matches `localpart@domain.tld`: local part of letters/digits/`._%+-`,
/// domain labels of letters/digits/`.-`, and a final label of 2+ letters.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

/// Extracts distinct email-like strings from text
///
/// Candidates come from [`EMAIL_REGEX`] and then pass a post-filter: the
/// local part must be non-empty and the domain part must contain a dot.
/// The pattern already guarantees both today; the filter stays so a loosened
/// pattern cannot silently admit junk.
///
/// # Examples
///
/// ```
/// use mailsweep::crawler::extract_emails;
///
/// let found = extract_emails("Contact us at sales@example.com or (invalid)@@bad");
/// assert_eq!(found.len(), 1);
/// assert!(found.contains("sales@example.com"));
/// ```
pub fn extract_emails(text: &str) -> BTreeSet<String> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|candidate| is_plausible_email(candidate))
        .collect()
}

/// Defensive double-check behind the pattern match
fn is_plausible_email(candidate: &str) -> bool {
    match candidate.rsplit_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

/// Collects the visible text of a document
///
/// Walks every text node, skipping anything inside `<script>`, `<style>`,
/// or `<noscript>`. A space separates adjacent fragments so emails from
/// neighboring elements never run together into one token.
pub fn visible_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.tree.nodes() {
        if let Node::Text(fragment) = node.value() {
            let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
                Node::Element(element) => {
                    matches!(element.name(), "script" | "style" | "noscript")
                }
                _ => false,
            });

            if !hidden {
                text.push_str(fragment);
                text.push(' ');
            }
        }
    }

    text
}

/// Extracts hyperlink targets from a document, in document order
///
/// Each `<a href>` is resolved against the page's own URL. Targets that can
/// never be fetched are dropped here: empty and fragment-only hrefs,
/// `javascript:`/`mailto:`/`tel:`/`data:` schemes, and anything that is not
/// http(s) after resolution. Fragments are stripped so anchor variants of a
/// page dedupe in the visited set.
pub fn extract_links(document: &Html, page_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(resolved) = resolve_link(href, page_url) {
                    links.push(resolved);
                }
            }
        }
    }

    links
}

/// Resolves an href to an absolute, fetchable URL
fn resolve_link(href: &str, page_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let mut resolved = page_url.join(href).ok()?;

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    resolved.set_fragment(None);
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    #[test]
    fn test_extract_single_email() {
        let found = extract_emails("Reach us at info@example.com today");
        assert_eq!(found.len(), 1);
        assert!(found.contains("info@example.com"));
    }

    #[test]
    fn test_malformed_candidates_excluded() {
        let found = extract_emails("Contact us at sales@example.com or (invalid)@@bad");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["sales@example.com"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let found = extract_emails("a@example.com, a@example.com, b@example.com");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_result_is_sorted() {
        let found: Vec<String> = extract_emails("zoe@example.com then amy@example.com")
            .into_iter()
            .collect();
        assert_eq!(found, vec!["amy@example.com", "zoe@example.com"]);
    }

    #[test]
    fn test_plus_and_dots_in_local_part() {
        let found = extract_emails("billing+invoices@mail.example.co.uk");
        assert!(found.contains("billing+invoices@mail.example.co.uk"));
    }

    #[test]
    fn test_single_label_domain_rejected_by_post_filter() {
        assert!(!is_plausible_email("user@localhost"));
        assert!(!is_plausible_email("@example.com"));
        assert!(is_plausible_email("user@example.com"));
    }

    #[test]
    fn test_no_emails_in_plain_text() {
        assert!(extract_emails("nothing to see here").is_empty());
    }

    #[test]
    fn test_visible_text_includes_body_text() {
        let document = Html::parse_document(
            "<html><body><p>Write to team@example.com</p></body></html>",
        );
        let text = visible_text(&document);
        assert!(text.contains("team@example.com"));
    }

    #[test]
    fn test_visible_text_skips_script_and_style() {
        let document = Html::parse_document(
            r#"<html><head><style>.x { color: red; }</style></head>
            <body><script>var spam = "bot@example.com";</script>
            <p>real@example.com</p></body></html>"#,
        );
        let text = visible_text(&document);
        assert!(text.contains("real@example.com"));
        assert!(!text.contains("bot@example.com"));
        assert!(!text.contains("color: red"));
    }

    #[test]
    fn test_adjacent_elements_do_not_merge() {
        let document = Html::parse_document(
            "<html><body><span>a@example.com</span><span>b@example.com</span></body></html>",
        );
        let found = extract_emails(&visible_text(&document));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_extract_relative_link() {
        let document = Html::parse_document(r#"<html><body><a href="/other">Link</a></body></html>"#);
        let links = extract_links(&document, &page_url());
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].as_str(), "https://example.com/other");
    }

    #[test]
    fn test_extract_links_in_document_order() {
        let document = Html::parse_document(
            r#"<html><body>
            <a href="/first">1</a>
            <a href="/second">2</a>
            <a href="https://other.com/third">3</a>
            </body></html>"#,
        );
        let links = extract_links(&document, &page_url());
        let paths: Vec<&str> = links.iter().map(|u| u.path()).collect();
        assert_eq!(paths, vec!["/first", "/second", "/third"]);
    }

    #[test]
    fn test_skip_special_schemes() {
        let document = Html::parse_document(
            r#"<html><body>
            <a href="javascript:void(0)">js</a>
            <a href="mailto:test@example.com">mail</a>
            <a href="tel:+1234567890">tel</a>
            <a href="data:text/html,hi">data</a>
            </body></html>"#,
        );
        assert!(extract_links(&document, &page_url()).is_empty());
    }

    #[test]
    fn test_skip_fragment_only_link() {
        let document =
            Html::parse_document(r##"<html><body><a href="#section">Jump</a></body></html>"##);
        assert!(extract_links(&document, &page_url()).is_empty());
    }

    #[test]
    fn test_fragment_stripped_from_link() {
        let document = Html::parse_document(
            r##"<html><body><a href="/team#alice">Alice</a></body></html>"##,
        );
        let links = extract_links(&document, &page_url());
        assert_eq!(links[0].as_str(), "https://example.com/team");
    }
}
