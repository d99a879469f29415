//! Ticker candidate extraction.
//!
//! A candidate is a standalone word of 2 to 5 uppercase Latin letters. Word
//! boundaries are Unicode-aware, so `XYZABC` yields nothing and `AB-CD` yields
//! `AB` then `CD`.

use regex::Regex;
use std::sync::LazyLock;

pub const MIN_TICKER_LEN: usize = 2;
pub const MAX_TICKER_LEN: usize = 5;

static TICKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,5}\b").unwrap());

/// Lazily yield candidate tickers in order of occurrence.
///
/// Duplicates are kept: three mentions of `TSLA` in one comment are three
/// candidates.
pub fn extract_tickers(text: &str) -> impl Iterator<Item = &str> + '_ {
    TICKER_REGEX.find_iter(text).map(|m| m.as_str())
}

/// True if `token` has the shape of a ticker candidate.
pub fn is_ticker_shaped(token: &str) -> bool {
    (MIN_TICKER_LEN..=MAX_TICKER_LEN).contains(&token.len())
        && token.bytes().all(|b| b.is_ascii_uppercase())
}
