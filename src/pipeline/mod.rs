//! Pipeline entry points for checker operations.
//!
//! - `run_check`: Probe every catalog link and report to the console
//! - `run_validate`: Validate configuration and catalog files

pub mod check;
pub mod validate;

pub use check::run_check;
pub use validate::run_validate;
