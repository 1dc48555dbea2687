//! Link entries and per-check outcome structures.

use serde::{Deserialize, Serialize};

/// One link from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkEntry {
    /// Grouping label (e.g. a media category)
    pub category: String,

    /// Display title
    pub title: String,

    /// Full URL of the hosted file
    pub url: String,
}

/// Tri-state verdict for one link.
///
/// `Indeterminate` means the probe itself failed (timeout, connection
/// refused, malformed response) before reaching a definite answer. It is
/// kept distinct from `Unavailable` so consumers can tell "confirmed down"
/// from "could not check"; aggregate counts fold it into unavailable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// The provider is serving the file
    Available,
    /// The provider reports the file gone, or the link is not recognized
    Unavailable,
    /// The probe failed before a definite answer
    Indeterminate,
}

/// Result of probing one catalog entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Position of the entry within the submitted batch
    pub index: usize,

    /// The entry that was probed
    pub entry: LinkEntry,

    /// Verdict for this link
    pub status: CheckStatus,

    /// Diagnostic detail (matched marker, HTTP status, error message)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Aggregate counts over one batch run.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of entries submitted
    pub total: usize,

    /// Links confirmed serving content
    pub available: usize,

    /// Links down or indeterminate; per-link detail stays on the outcome
    pub unavailable: usize,
}

impl BatchSummary {
    /// Start a summary for a batch of `total` entries.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Record one outcome status.
    pub fn record(&mut self, status: CheckStatus) {
        match status {
            CheckStatus::Available => self.available += 1,
            CheckStatus::Unavailable | CheckStatus::Indeterminate => self.unavailable += 1,
        }
    }

    /// Number of outcomes recorded so far.
    pub fn completed(&self) -> usize {
        self.available + self.unavailable
    }
}

/// Events published on a batch's result stream.
#[derive(Debug, Clone)]
pub enum BatchEvent {
    /// One link finished checking; emitted in completion order
    Outcome(CheckOutcome),
    /// All links finished; emitted exactly once, then the stream closes
    Completed(BatchSummary),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_folds_indeterminate_into_unavailable() {
        let mut summary = BatchSummary::new(3);
        summary.record(CheckStatus::Available);
        summary.record(CheckStatus::Unavailable);
        summary.record(CheckStatus::Indeterminate);

        assert_eq!(summary.available, 1);
        assert_eq!(summary.unavailable, 2);
        assert_eq!(summary.completed(), summary.total);
    }

    #[test]
    fn new_summary_is_empty() {
        let summary = BatchSummary::new(5);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.completed(), 0);
    }
}
