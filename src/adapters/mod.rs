//! Concrete adapter implementations for ports.

pub mod csv_report_adapter;
pub mod file_comment_adapter;
pub mod file_config_adapter;
pub mod html_report;
#[cfg(feature = "reddit")]
pub mod reddit_adapter;
pub mod vader_adapter;
