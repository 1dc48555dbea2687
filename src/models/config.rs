//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Probe scheduling and shared HTTP behavior
    #[serde(default)]
    pub checker: CheckerConfig,

    /// MediaFire page heuristics
    #[serde(default)]
    pub mediafire: MediafireConfig,

    /// MEGA command API settings
    #[serde(default)]
    pub mega: MegaConfig,

    /// Console logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// File locations
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.checker.user_agent.trim().is_empty() {
            return Err(AppError::validation("checker.user_agent is empty"));
        }
        if self.checker.max_concurrent == 0 {
            return Err(AppError::validation("checker.max_concurrent must be > 0"));
        }
        if self.mediafire.timeout_secs == 0 {
            return Err(AppError::validation("mediafire.timeout_secs must be > 0"));
        }
        if self.mediafire.user_agent.trim().is_empty() {
            return Err(AppError::validation("mediafire.user_agent is empty"));
        }
        if self.mediafire.error_phrases.is_empty() {
            return Err(AppError::validation("mediafire.error_phrases is empty"));
        }
        if self.mediafire.indicators.is_empty()
            && self.mediafire.exact_indicators.is_empty()
            && self.mediafire.paired_indicators.is_empty()
        {
            return Err(AppError::validation(
                "mediafire has no availability indicators configured",
            ));
        }
        if self.mega.timeout_secs == 0 {
            return Err(AppError::validation("mega.timeout_secs must be > 0"));
        }
        if url::Url::parse(&self.mega.endpoint).is_err() {
            return Err(AppError::validation(format!(
                "mega.endpoint is not a valid URL: {}",
                self.mega.endpoint
            )));
        }
        Ok(())
    }
}

/// Probe scheduling and shared HTTP behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// User-Agent header for API-style requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Maximum probes in flight at once
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// MediaFire page-scan settings.
///
/// The phrase and marker lists track MediaFire's current page markup, which
/// changes without notice; they are data here so an operator can update them
/// without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediafireConfig {
    /// Request timeout in seconds
    #[serde(default = "defaults::mediafire_timeout")]
    pub timeout_secs: u64,

    /// Desktop-browser User-Agent presented to the file page
    #[serde(default = "defaults::browser_user_agent")]
    pub user_agent: String,

    /// Removal notices; any match forces an unavailable verdict
    /// (matched case-insensitively)
    #[serde(default = "defaults::error_phrases")]
    pub error_phrases: Vec<String>,

    /// Markers of a live download page (matched case-insensitively)
    #[serde(default = "defaults::indicators")]
    pub indicators: Vec<String>,

    /// Markers matched against the original casing (class/id attribute
    /// fragments that are case-sensitive in the markup)
    #[serde(default = "defaults::exact_indicators")]
    pub exact_indicators: Vec<String>,

    /// Token pairs that must both appear (matched case-insensitively)
    #[serde(default = "defaults::paired_indicators")]
    pub paired_indicators: Vec<TokenPair>,
}

impl Default for MediafireConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::mediafire_timeout(),
            user_agent: defaults::browser_user_agent(),
            error_phrases: defaults::error_phrases(),
            indicators: defaults::indicators(),
            exact_indicators: defaults::exact_indicators(),
            paired_indicators: defaults::paired_indicators(),
        }
    }
}

/// A pair of tokens that must co-occur in a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub first: String,
    pub second: String,
}

/// MEGA command API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MegaConfig {
    /// Command-server endpoint
    #[serde(default = "defaults::mega_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::mega_timeout")]
    pub timeout_secs: u64,
}

impl Default for MegaConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::mega_endpoint(),
            timeout_secs: defaults::mega_timeout(),
        }
    }
}

/// Console logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level for console output ("debug", "info", "warn", "error")
    #[serde(default = "defaults::log_level")]
    pub level: String,

    /// Print per-link diagnostic detail under each result line
    #[serde(default = "defaults::show_progress")]
    pub show_progress: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            show_progress: defaults::show_progress(),
        }
    }
}

/// File locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Catalog of links to check
    #[serde(default = "defaults::links_file")]
    pub links_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            links_file: defaults::links_file(),
        }
    }
}

mod defaults {
    use super::TokenPair;

    // Checker defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; linkmon/1.0)".into()
    }
    pub fn max_concurrent() -> usize {
        8
    }

    // MediaFire defaults
    pub fn mediafire_timeout() -> u64 {
        10
    }
    pub fn browser_user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
            .into()
    }
    pub fn error_phrases() -> Vec<String> {
        vec![
            "file has been removed".into(),
            "file no longer available".into(),
            "file you requested is not available".into(),
            "invalid or deleted file".into(),
            "file not found".into(),
        ]
    }
    pub fn indicators() -> Vec<String> {
        vec![
            "download_link".into(),
            r#"aria-label="download""#.into(),
            r#"id="downloadbutton""#.into(),
            r#"id="download_link""#.into(),
            "download_file".into(),
        ]
    }
    pub fn exact_indicators() -> Vec<String> {
        vec!["mf-dlr".into(), r#"class="input popsok""#.into()]
    }
    pub fn paired_indicators() -> Vec<TokenPair> {
        vec![TokenPair {
            first: "filename".into(),
            second: "filesize".into(),
        }]
    }

    // MEGA defaults
    pub fn mega_endpoint() -> String {
        "https://g.api.mega.co.nz/cs".into()
    }
    pub fn mega_timeout() -> u64 {
        8
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
    pub fn show_progress() -> bool {
        true
    }

    // Path defaults
    pub fn links_file() -> String {
        "data/links.toml".into()
    }
}
