//! wsb-sentiment: ticker mention and sentiment analysis for discussion threads.
//!
//! Hexagonal architecture: the analysis pipeline lives in [`domain`], port
//! traits in [`ports`], concrete retrieval/scoring/report implementations in
//! [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
