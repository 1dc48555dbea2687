// src/services/batch.rs

//! Batch check orchestration.
//!
//! Fans a catalog out over the provider strategies with bounded concurrency
//! and streams outcomes back in completion order over a per-batch channel,
//! followed by exactly one summary. One batch is active per runner at a
//! time; starting a new one supersedes the previous, matching
//! refresh-from-scratch semantics.

use std::sync::{Arc, Mutex, PoisonError};

use futures::stream::{self, StreamExt};
use tokio::sync::{mpsc, watch};

use crate::models::{BatchEvent, BatchSummary, CheckOutcome, CheckStatus, LinkEntry};
use crate::services::ProviderRegistry;

/// Outcome detail used when no strategy claims a URL.
pub const UNSUPPORTED_PROVIDER: &str = "unsupported provider";

/// Runs batches of link checks against a provider registry.
///
/// Dropping the runner supersedes whatever batch is still in flight.
pub struct BatchRunner {
    registry: Arc<ProviderRegistry>,
    max_concurrent: usize,
    supersede: Mutex<Option<watch::Sender<bool>>>,
}

impl BatchRunner {
    pub fn new(registry: Arc<ProviderRegistry>, max_concurrent: usize) -> Self {
        Self {
            registry,
            max_concurrent: max_concurrent.max(1),
            supersede: Mutex::new(None),
        }
    }

    /// Start checking `entries`, superseding any batch still in flight.
    ///
    /// Returns the receiving end of the batch's private event stream: one
    /// `Outcome` per entry in completion order, then exactly one
    /// `Completed`, then the channel closes. A superseded batch stops
    /// publishing on its own stream and never sends its summary; because
    /// every batch owns a fresh channel, its leftovers can never appear on
    /// a newer batch's stream.
    pub fn run_batch(&self, entries: Vec<LinkEntry>) -> mpsc::UnboundedReceiver<BatchEvent> {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let previous = self
            .supersede
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(cancel_tx);
        if let Some(previous) = previous {
            let _ = previous.send(true);
        }

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let registry = Arc::clone(&self.registry);
        let max_concurrent = self.max_concurrent;
        tokio::spawn(drive_batch(
            registry,
            entries,
            max_concurrent,
            event_tx,
            cancel_rx,
        ));
        event_rx
    }
}

/// Probe every entry and publish events until done or superseded.
async fn drive_batch(
    registry: Arc<ProviderRegistry>,
    entries: Vec<LinkEntry>,
    max_concurrent: usize,
    events: mpsc::UnboundedSender<BatchEvent>,
    mut superseded: watch::Receiver<bool>,
) {
    let mut summary = BatchSummary::new(entries.len());
    let mut outcomes = stream::iter(entries.into_iter().enumerate())
        .map(|(index, entry)| {
            let registry = Arc::clone(&registry);
            async move { probe(&registry, index, entry).await }
        })
        .buffer_unordered(max_concurrent);

    loop {
        tokio::select! {
            changed = superseded.changed() => {
                // A closed watch channel means the runner itself is gone;
                // either way this batch stops publishing here.
                if changed.is_err() || *superseded.borrow() {
                    log::debug!(
                        "batch superseded after {} of {} outcomes",
                        summary.completed(),
                        summary.total
                    );
                    return;
                }
            }
            outcome = outcomes.next() => {
                let Some(outcome) = outcome else { break };
                summary.record(outcome.status);
                if events.send(BatchEvent::Outcome(outcome)).is_err() {
                    // Receiver dropped; nobody is listening anymore.
                    return;
                }
            }
        }
    }

    let _ = events.send(BatchEvent::Completed(summary));
}

/// Check a single entry, converting every failure into an outcome. Probe
/// errors never escape: one dead link must not take the batch down with it.
async fn probe(registry: &ProviderRegistry, index: usize, entry: LinkEntry) -> CheckOutcome {
    let Some(provider) = registry.resolve(&entry.url) else {
        return CheckOutcome {
            index,
            status: CheckStatus::Unavailable,
            detail: Some(UNSUPPORTED_PROVIDER.to_string()),
            entry,
        };
    };

    match provider.check(&entry.url).await {
        Ok(verdict) => CheckOutcome {
            index,
            status: verdict.status,
            detail: verdict.detail,
            entry,
        },
        Err(error) => {
            log::warn!(
                "{} check failed for {}: {}",
                provider.name(),
                entry.url,
                error
            );
            CheckOutcome {
                index,
                status: CheckStatus::Indeterminate,
                detail: Some(error.to_string()),
                entry,
            }
        }
    }
}
