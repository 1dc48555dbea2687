//! Provider strategy capability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::CheckStatus;

/// What a single probe concluded, with optional diagnostic detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub status: CheckStatus,
    pub detail: Option<String>,
}

impl Verdict {
    /// The link is serving content.
    pub fn available(detail: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Available,
            detail: Some(detail.into()),
        }
    }

    /// The link is confirmed not serving content.
    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Unavailable,
            detail: Some(detail.into()),
        }
    }
}

/// A strategy that can probe one provider's links.
///
/// Implementations perform at most one network exchange per call and keep
/// no state between calls. Classification results, including "the provider
/// says this file is gone", are `Ok` verdicts; `Err` is reserved for probe
/// failures such as timeouts, connection errors, or unparseable responses,
/// which the orchestrator downgrades to an indeterminate outcome.
#[async_trait]
pub trait ProviderCheck: Send + Sync {
    /// Short provider name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this strategy is responsible for the given URL.
    fn matches(&self, url: &str) -> bool;

    /// Probe the URL once.
    async fn check(&self, url: &str) -> Result<Verdict>;
}
