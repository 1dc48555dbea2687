//! Utility functions and helpers.

pub mod http;
pub mod log;

use unicode_segmentation::UnicodeSegmentation;
use url::Url;

/// Extract the host from a URL string.
pub fn get_domain(url_str: &str) -> Option<String> {
    Url::parse(url_str)
        .ok()
        .and_then(|u| u.host_str().map(|s| s.to_string()))
}

/// Whether a URL's host equals `domain` or is a subdomain of it.
///
/// Falls back to a plain substring test when the URL does not parse, since
/// catalog entries are user data and may be sloppy.
pub fn host_matches(url_str: &str, domain: &str) -> bool {
    match get_domain(url_str) {
        Some(host) => host == domain || host.ends_with(&format!(".{domain}")),
        None => url_str.contains(domain),
    }
}

/// Truncate to at most `max` grapheme clusters, appending an ellipsis when
/// anything was cut.
pub fn truncate_graphemes(s: &str, max: usize) -> String {
    if s.graphemes(true).count() <= max {
        return s.to_string();
    }
    let kept: String = s.graphemes(true).take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_domain() {
        assert_eq!(
            get_domain("https://www.mediafire.com/file/x"),
            Some("www.mediafire.com".to_string())
        );
        assert_eq!(get_domain("not a url"), None);
    }

    #[test]
    fn test_host_matches_subdomains() {
        assert!(host_matches("https://mega.nz/file/a#b", "mega.nz"));
        assert!(host_matches("https://www.mediafire.com/file/x", "mediafire.com"));
        assert!(!host_matches("https://mediafire.com.evil.example/x", "mediafire.com"));
        assert!(!host_matches("https://example.com/mediafire.com", "mediafire.com"));
    }

    #[test]
    fn test_host_matches_falls_back_to_substring() {
        assert!(host_matches("mediafire.com/file/x", "mediafire.com"));
        assert!(!host_matches("example.com/file/x", "mediafire.com"));
    }

    #[test]
    fn test_truncate_graphemes() {
        assert_eq!(truncate_graphemes("short", 10), "short");
        assert_eq!(truncate_graphemes("abcdef", 4), "abc…");
        // Grapheme clusters are not split mid-character.
        assert_eq!(truncate_graphemes("café au lait", 5), "café…");
    }
}
