//! Error handling
//!
//! Defines error types, their handling, and the reports built from them.

pub mod handlers;
pub mod report;
pub mod types;

pub use report::ErrorReport;
pub use types::*;
