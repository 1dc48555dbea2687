// src/pipeline/validate.rs

use std::path::Path;

use crate::config::{catalog_path, load_catalog};
use crate::error::Result;
use crate::models::Config;
use crate::utils::log;

/// Validate the configuration and the link catalog.
pub fn run_validate(config: &Config, links_override: Option<&Path>) -> Result<()> {
    log::header("Validation");

    config.validate()?;
    log::success("Configuration OK");
    log::sub_item(&format!("user agent: {}", config.checker.user_agent));
    log::sub_item(&format!(
        "max concurrent probes: {}",
        config.checker.max_concurrent
    ));
    log::sub_item(&format!(
        "mediafire timeout: {}s, {} error phrases, {} indicators",
        config.mediafire.timeout_secs,
        config.mediafire.error_phrases.len(),
        config.mediafire.indicators.len()
            + config.mediafire.exact_indicators.len()
            + config.mediafire.paired_indicators.len()
    ));
    log::sub_item(&format!(
        "mega endpoint: {} (timeout {}s)",
        config.mega.endpoint, config.mega.timeout_secs
    ));

    let catalog = load_catalog(config, links_override)?;
    log::success("Catalog OK");
    log::sub_item(&format!(
        "{} links in {}",
        catalog.len(),
        catalog_path(config, links_override).display()
    ));

    Ok(())
}
