//! Service layer for the link checker.
//!
//! This module contains the business logic for:
//! - Provider probing strategies (`MediafireChecker`, `MegaChecker`)
//! - URL-to-strategy dispatch (`ProviderRegistry`)
//! - Concurrent batch execution (`BatchRunner`)

mod batch;
mod mediafire;
mod mega;
mod provider;
mod registry;

pub use batch::{BatchRunner, UNSUPPORTED_PROVIDER};
pub use mediafire::MediafireChecker;
pub use mega::MegaChecker;
pub use provider::{ProviderCheck, Verdict};
pub use registry::ProviderRegistry;
