// src/pipeline/check.rs

//! Link checking pipeline.

use std::sync::Arc;

use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::{BatchEvent, Catalog, CheckStatus, Config};
use crate::services::{BatchRunner, ProviderRegistry};
use crate::utils::log;
use crate::utils::truncate_graphemes;

/// Fixed-width status tag for one console line.
fn status_tag(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Available => "UP  ",
        CheckStatus::Unavailable => "DOWN",
        CheckStatus::Indeterminate => "??? ",
    }
}

/// Run one full check over the catalog, reporting each link as its probe
/// completes and a summary at the end.
pub async fn run_check(config: &Config, catalog: &Catalog) -> Result<()> {
    let start_time = Utc::now();
    log::header("Link availability check");
    log::info(&format!(
        "Checking {} links ({} probes at a time)",
        catalog.len(),
        config.checker.max_concurrent
    ));

    let registry = Arc::new(ProviderRegistry::from_config(config)?);
    let runner = BatchRunner::new(registry, config.checker.max_concurrent);
    let mut events = runner.run_batch(catalog.links.clone());

    let mut summary = None;
    while let Some(event) = events.recv().await {
        match event {
            BatchEvent::Outcome(outcome) => {
                let line = format!(
                    "[{}] {} | {} | {}",
                    status_tag(outcome.status),
                    outcome.entry.category,
                    truncate_graphemes(&outcome.entry.title, 48),
                    outcome.entry.url
                );
                match outcome.status {
                    CheckStatus::Available => log::success(&line),
                    _ => log::warn(&line),
                }
                if config.logging.show_progress {
                    if let Some(detail) = &outcome.detail {
                        log::sub_item(detail);
                    }
                }
            }
            BatchEvent::Completed(batch_summary) => summary = Some(batch_summary),
        }
    }

    // The runner is alive for the whole loop, so the only way out without a
    // summary would be a bug in the orchestrator itself.
    let summary = summary
        .ok_or_else(|| AppError::validation("check run ended without a summary"))?;

    let elapsed = Utc::now() - start_time;
    log::separator();
    log::summary(
        "Results",
        &[
            ("active", summary.available.to_string()),
            ("down", summary.unavailable.to_string()),
            ("total", summary.total.to_string()),
            (
                "elapsed",
                format!("{:.1}s", elapsed.num_milliseconds() as f64 / 1000.0),
            ),
        ],
    );

    if summary.total == 0 {
        log::warn("Catalog is empty; nothing was checked");
    } else if summary.available == summary.total {
        log::success("All links are up");
    } else if summary.available == 0 {
        log::error("All links are down");
    } else {
        log::warn(&format!("{} link(s) down", summary.unavailable));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LinkEntry;

    #[tokio::test]
    async fn run_check_settles_unsupported_links_offline() {
        let config = Config::default();
        let catalog = Catalog {
            links: vec![
                LinkEntry {
                    category: "test".to_string(),
                    title: "nowhere".to_string(),
                    url: "https://example.com/file/1".to_string(),
                },
                LinkEntry {
                    category: "test".to_string(),
                    title: "bad mega link".to_string(),
                    url: "https://mega.nz/file/missing-key".to_string(),
                },
            ],
        };

        assert!(run_check(&config, &catalog).await.is_ok());
    }

    #[tokio::test]
    async fn run_check_handles_empty_catalog() {
        assert!(run_check(&Config::default(), &Catalog::default()).await.is_ok());
    }
}
