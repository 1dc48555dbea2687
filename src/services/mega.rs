// src/services/mega.rs

//! MEGA availability checks.
//!
//! MEGA exposes a minimal command API, so this check is a structured
//! request rather than page scanning: one `{"a": "g", "p": <id>}` lookup
//! against the command server. Only the file id from the URL is used; the
//! decryption key after the `#` never leaves the process, since existence
//! is all that is being asked.

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde_json::{Value, json};

use crate::error::{AppError, Result};
use crate::models::MegaConfig;
use crate::services::{ProviderCheck, Verdict};
use crate::utils::{host_matches, http};

const DOMAIN: &str = "mega.nz";

/// Shape of a public file link: `/file/<fileId>#<key>`.
const FILE_LINK_PATTERN: &str = r"/file/([A-Za-z0-9_-]+)#([A-Za-z0-9_-]+)";

/// Command-API strategy for MEGA links.
pub struct MegaChecker {
    config: MegaConfig,
    client: Client,
    file_link: Regex,
}

impl MegaChecker {
    /// Create a checker with its own API HTTP client.
    pub fn new(config: MegaConfig, user_agent: &str) -> Result<Self> {
        let client = http::create_client(user_agent, config.timeout_secs)?;
        let file_link = Regex::new(FILE_LINK_PATTERN)
            .map_err(|e| AppError::config(format!("invalid file link pattern: {e}")))?;
        Ok(Self {
            config,
            client,
            file_link,
        })
    }

    /// Extract the file id from a public link, or `None` if the URL is not
    /// a recognizable file link.
    fn file_id<'a>(&self, url: &'a str) -> Option<&'a str> {
        self.file_link
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Classify the command-server reply.
    ///
    /// The API answers `[{"s": <size>, ...}]` for an existing file and
    /// `[<negative error code>]` for a missing or revoked one. Anything
    /// else is treated as unavailable rather than guessed at.
    fn classify_response(value: &Value) -> Verdict {
        let Some(first) = value.as_array().and_then(|items| items.first()) else {
            return Verdict::unavailable("empty api response");
        };

        if let Some(code) = first.as_i64() {
            return Verdict::unavailable(format!("api error code {code}"));
        }

        if let Some(object) = first.as_object() {
            if object.contains_key("s") {
                let detail = object
                    .get("s")
                    .and_then(Value::as_u64)
                    .map(|size| format!("file size {size} bytes"))
                    .unwrap_or_else(|| "file entry present".to_string());
                return Verdict::available(detail);
            }
        }

        Verdict::unavailable("unrecognized api response")
    }
}

#[async_trait]
impl ProviderCheck for MegaChecker {
    fn name(&self) -> &'static str {
        "mega"
    }

    fn matches(&self, url: &str) -> bool {
        host_matches(url, DOMAIN)
    }

    async fn check(&self, url: &str) -> Result<Verdict> {
        // Malformed links are settled here; they must never cause traffic.
        let Some(file_id) = self.file_id(url) else {
            return Ok(Verdict::unavailable("not a recognized file link"));
        };

        let payload = json!([{ "a": "g", "p": file_id }]);
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Ok(Verdict::unavailable(format!("HTTP {status}")));
        }

        let body = response.text().await?;
        log::debug!("mega api reply for {file_id}: {body}");
        let value: Value = serde_json::from_str(&body)
            .map_err(|e| AppError::unexpected_response("mega api", e))?;
        Ok(Self::classify_response(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CheckStatus;

    fn checker() -> MegaChecker {
        MegaChecker::new(MegaConfig::default(), "linkmon/test").unwrap()
    }

    #[test]
    fn file_id_extracted_from_public_link() {
        let checker = checker();
        assert_eq!(
            checker.file_id("https://mega.nz/file/AbC-123_#x-Y_9z"),
            Some("AbC-123_")
        );
        assert_eq!(checker.file_id("https://mega.nz/folder/AbC123#key"), None);
        assert_eq!(checker.file_id("https://mega.nz/file/AbC123"), None);
    }

    #[test]
    fn error_code_reply_means_unavailable() {
        let verdict = MegaChecker::classify_response(&json!([-9]));
        assert_eq!(verdict.status, CheckStatus::Unavailable);
        assert!(verdict.detail.unwrap().contains("-9"));
    }

    #[test]
    fn size_field_means_available() {
        let verdict =
            MegaChecker::classify_response(&json!([{ "s": 1_048_576, "at": "opaque" }]));
        assert_eq!(verdict.status, CheckStatus::Available);
        assert!(verdict.detail.unwrap().contains("1048576"));
    }

    #[test]
    fn unexpected_shapes_mean_unavailable() {
        assert_eq!(
            MegaChecker::classify_response(&json!([])).status,
            CheckStatus::Unavailable
        );
        assert_eq!(
            MegaChecker::classify_response(&json!("nope")).status,
            CheckStatus::Unavailable
        );
        assert_eq!(
            MegaChecker::classify_response(&json!([{ "e": 1 }])).status,
            CheckStatus::Unavailable
        );
    }

    #[tokio::test]
    async fn malformed_link_is_settled_without_network() {
        // The endpoint is unroutable; a network attempt would surface as Err.
        let config = MegaConfig {
            endpoint: "http://127.0.0.1:9/cs".to_string(),
            ..MegaConfig::default()
        };
        let checker = MegaChecker::new(config, "linkmon/test").unwrap();

        let verdict = checker.check("https://mega.nz/file/no-key-here").await.unwrap();
        assert_eq!(verdict.status, CheckStatus::Unavailable);
        assert!(verdict.detail.unwrap().contains("not a recognized"));
    }

    #[test]
    fn matches_only_mega_hosts() {
        let checker = checker();
        assert!(checker.matches("https://mega.nz/file/a#b"));
        assert!(!checker.matches("https://www.mediafire.com/file/x"));
    }
}
