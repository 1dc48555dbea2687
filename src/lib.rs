// src/lib.rs

//! linkmon library
//!
//! Verifies whether externally hosted file-sharing links (MediaFire, MEGA)
//! are still reachable and serving content, streaming per-link results back
//! as probes complete.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
