//! droplens library - interactive DROP log extractor
//!
//! Parsing, aggregation and filtering are exposed for the binary, the
//! integration tests and anyone embedding the extractor.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod drops;
pub mod error;
pub mod export;
pub mod filter;
pub mod input;
pub mod notification;
pub mod scroll;
pub mod summary;
pub mod theme;
pub mod views;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, Focus, ViewMode};
pub use config::Config;
pub use drops::{Dataset, DropRecord, GlobalStat};
pub use error::DroplensError;
