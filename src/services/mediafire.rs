// src/services/mediafire.rs

//! MediaFire availability checks.
//!
//! MediaFire has no public status API, so the check fetches the file page
//! with a browser-profile client and scans the markup: first for the
//! provider's removal notices, then for markers that only appear on live
//! download pages. The phrase and marker lists live in `[mediafire]`
//! configuration because they track markup that changes without notice.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::MediafireConfig;
use crate::services::{ProviderCheck, Verdict};
use crate::utils::{host_matches, http};

const DOMAIN: &str = "mediafire.com";

/// Page-scanning strategy for MediaFire links.
pub struct MediafireChecker {
    config: MediafireConfig,
    client: Client,
}

impl MediafireChecker {
    /// Create a checker with its own browser-profile HTTP client.
    pub fn new(config: MediafireConfig) -> Result<Self> {
        let client = http::create_browser_client(&config.user_agent, config.timeout_secs)?;
        Ok(Self { config, client })
    }

    /// Classify a fetched file page.
    ///
    /// Removal notices win over any download marker: MediaFire renders some
    /// download chrome even on tombstone pages. Among positives, a single
    /// match is enough, keeping the check permissive against partial page
    /// redesigns.
    fn classify_page(&self, body: &str) -> Verdict {
        let lower = body.to_lowercase();

        for phrase in &self.config.error_phrases {
            if lower.contains(&phrase.to_lowercase()) {
                return Verdict::unavailable(format!("removal notice: \"{phrase}\""));
            }
        }

        for marker in &self.config.indicators {
            if lower.contains(&marker.to_lowercase()) {
                return Verdict::available(format!("download marker: \"{marker}\""));
            }
        }

        for marker in &self.config.exact_indicators {
            if body.contains(marker.as_str()) {
                return Verdict::available(format!("download marker: \"{marker}\""));
            }
        }

        for pair in &self.config.paired_indicators {
            if lower.contains(&pair.first.to_lowercase())
                && lower.contains(&pair.second.to_lowercase())
            {
                return Verdict::available(format!(
                    "download markers: \"{}\" with \"{}\"",
                    pair.first, pair.second
                ));
            }
        }

        Verdict::unavailable("no download markers found")
    }
}

#[async_trait]
impl ProviderCheck for MediafireChecker {
    fn name(&self) -> &'static str {
        "mediafire"
    }

    fn matches(&self, url: &str) -> bool {
        host_matches(url, DOMAIN)
    }

    async fn check(&self, url: &str) -> Result<Verdict> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Ok(Verdict::unavailable(format!("HTTP {status}")));
        }

        let body = response.text().await?;
        log::debug!("mediafire page for {url}: {} bytes", body.len());
        Ok(self.classify_page(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CheckStatus;

    fn checker() -> MediafireChecker {
        MediafireChecker::new(MediafireConfig::default()).unwrap()
    }

    #[test]
    fn removal_notice_beats_download_marker() {
        let body = r#"<html>This File Has Been Removed <a class="download_link">x</a></html>"#;
        let verdict = checker().classify_page(body);
        assert_eq!(verdict.status, CheckStatus::Unavailable);
        assert!(verdict.detail.unwrap().contains("removal notice"));
    }

    #[test]
    fn download_link_marker_means_available() {
        let verdict = checker().classify_page(r#"<a class="download_link" href="/x">Get</a>"#);
        assert_eq!(verdict.status, CheckStatus::Available);
    }

    #[test]
    fn exact_markers_are_case_sensitive() {
        assert_eq!(
            checker().classify_page("<div class=\"mf-dlr\"></div>").status,
            CheckStatus::Available
        );
        assert_eq!(
            checker().classify_page("<div class=\"MF-DLR\"></div>").status,
            CheckStatus::Unavailable
        );
    }

    #[test]
    fn paired_tokens_require_both() {
        let checker = checker();
        assert_eq!(
            checker
                .classify_page("<div>FileName: x.zip FileSize: 1 MB</div>")
                .status,
            CheckStatus::Available
        );
        assert_eq!(
            checker.classify_page("<div>filename: x.zip</div>").status,
            CheckStatus::Unavailable
        );
    }

    #[test]
    fn bare_page_is_unavailable() {
        let verdict = checker().classify_page("<html><body>welcome</body></html>");
        assert_eq!(verdict.status, CheckStatus::Unavailable);
        assert!(verdict.detail.unwrap().contains("no download markers"));
    }

    #[test]
    fn matches_only_mediafire_hosts() {
        let checker = checker();
        assert!(checker.matches("https://www.mediafire.com/file/abc/x.zip/file"));
        assert!(!checker.matches("https://mega.nz/file/a#b"));
        assert!(!checker.matches("https://mediafire.com.evil.example/file"));
    }
}
