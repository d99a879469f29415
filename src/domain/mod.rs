//! Core analysis pipeline: extraction, filtering, classification, aggregation.

pub mod ticker;
pub mod exclusion;
pub mod sentiment;
pub mod aggregator;
pub mod report;
pub mod comment;
pub mod thread;
pub mod config;
pub mod config_validation;
pub mod error;
