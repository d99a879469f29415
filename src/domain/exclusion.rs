//! Denylist of uppercase words that look like tickers but are not.

use std::collections::HashSet;

use crate::domain::ticker::is_ticker_shaped;

/// Common words, forum slang, options jargon and index/ETF symbols.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    // English
    "THE", "AND", "FOR", "ARE", "BUT", "NOT", "YOU", "ALL", "CAN", "HER", "WAS", "ONE", "OUR",
    "HAD", "HAS", "HIS", "HOW", "ITS", "MAY", "NEW", "NOW", "OLD", "SEE", "TWO", "WHO", "BOY",
    "DID", "GET", "HIM", "LET", "PUT", "SAY", "SHE", "TOO", "USE", "YET",
    // slang
    "YOLO", "WSB", "DD", "TLDR", "IMO", "FOMO", "HODL", "DIAMOND", "HANDS", "TENDIES", "STONKS",
    "GAINS", "LOSSES", "MOON", "ROCKET", "PUMP", "DUMP", "BAG", "HOLDER", "APES", "SQUEEZE",
    // greeks and moneyness
    "GAMMA", "DELTA", "THETA", "VEGA", "IV", "OTM", "ITM", "ATM",
    // indices and ETFs
    "SPY", "QQQ", "IWM", "VIX", "SPX", "NDX", "RUT", "DIA", "XLF", "XLK", "XLE", "XLI", "XLY",
    "XLP", "XLU", "XLV", "XLB", "XLRE", "XLC",
];

/// Read-only set of excluded tokens. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    words: HashSet<String>,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::from_words(DEFAULT_EXCLUSIONS.iter().copied())
    }
}

impl ExclusionSet {
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Add more words to the set.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
    }

    pub fn is_excluded(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Drop excluded tokens, preserving order and duplicates.
    pub fn filter<'t, I>(&self, tokens: I) -> impl Iterator<Item = &'t str>
    where
        I: IntoIterator<Item = &'t str>,
    {
        tokens.into_iter().filter(move |t| !self.is_excluded(t))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sorted view, for display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

/// Words that no ticker candidate can ever equal, so excluding them is a no-op.
pub fn unmatchable_words<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
    words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| !is_ticker_shaped(w))
        .collect()
}
