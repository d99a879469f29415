//! Mention and sentiment aggregation over a batch of comments.

use std::collections::HashMap;

use crate::domain::config::AnalysisConfig;
use crate::domain::exclusion::ExclusionSet;
use crate::domain::sentiment::{self, Direction};
use crate::domain::ticker::extract_tickers;
use crate::ports::polarity_port::PolarityScorer;

const PROGRESS_INTERVAL: usize = 100;

/// Ticker counter that remembers the order tickers were first seen.
#[derive(Debug, Clone, Default)]
pub struct TickerCounts {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl TickerCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, ticker: &str) {
        match self.index.get(ticker) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(ticker.to_string(), self.entries.len());
                self.entries.push((ticker.to_string(), 1));
            }
        }
    }

    /// Count for `ticker`, zero if never seen.
    pub fn get(&self, ticker: &str) -> u64 {
        self.index.get(ticker).map_or(0, |&i| self.entries[i].1)
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.index.contains_key(ticker)
    }

    /// Distinct tickers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Top `n` by count; ties keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Equal when the same tickers carry the same counts, regardless of order.
impl PartialEq for TickerCounts {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(t, c)| other.get(t) == c)
    }
}

impl Eq for TickerCounts {}

/// Counters produced by one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    pub mentions: TickerCounts,
    pub bullish: TickerCounts,
    pub bearish: TickerCounts,
    pub comments_analyzed: usize,
    /// Comments whose polarity could not be scored and were left unclassified.
    pub unscored_comments: usize,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty()
    }
}

/// Owns the counters for the duration of a run.
#[derive(Debug, Default)]
pub struct Aggregator {
    result: AnalysisResult,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one valid ticker occurrence.
    pub fn record(&mut self, ticker: &str, direction: Direction) {
        self.result.mentions.increment(ticker);
        if direction.bullish {
            self.result.bullish.increment(ticker);
        }
        if direction.bearish {
            self.result.bearish.increment(ticker);
        }
    }

    /// Extract, filter, and count every ticker in one comment.
    ///
    /// Classification is skipped when a comment has no surviving tickers.
    pub fn process_comment(
        &mut self,
        text: &str,
        config: &AnalysisConfig,
        scorer: &dyn PolarityScorer,
    ) {
        self.result.comments_analyzed += 1;

        let tickers: Vec<&str> = valid_tickers(text, &config.exclusions).collect();
        if tickers.is_empty() {
            return;
        }

        let direction = match sentiment::classify(text, &config.sentiment, scorer) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!("leaving comment unclassified: {e}");
                self.result.unscored_comments += 1;
                Direction::NEUTRAL
            }
        };

        for ticker in tickers {
            self.record(ticker, direction);
        }
    }

    pub fn finish(self) -> AnalysisResult {
        self.result
    }
}

/// Candidate tickers in `text` that survive the exclusion set.
pub fn valid_tickers<'t>(
    text: &'t str,
    exclusions: &ExclusionSet,
) -> impl Iterator<Item = &'t str> {
    exclusions.filter(extract_tickers(text))
}

/// Run the full pipeline over a comment list.
///
/// At most `config.max_comments` comments are processed. An empty list yields
/// empty counters.
pub fn analyze_comments<S: AsRef<str>>(
    comments: &[S],
    config: &AnalysisConfig,
    scorer: &dyn PolarityScorer,
) -> AnalysisResult {
    let total = comments.len().min(config.max_comments);
    tracing::info!("Analyzing {total} comments for tickers and sentiment");

    let mut aggregator = Aggregator::new();
    for (i, comment) in comments.iter().take(total).enumerate() {
        if i % PROGRESS_INTERVAL == 0 {
            tracing::debug!("Processed {i}/{total} comments");
        }
        aggregator.process_comment(comment.as_ref(), config, scorer);
    }

    let result = aggregator.finish();
    tracing::info!(
        "Analysis complete: {} unique tickers, {} mentions",
        result.mentions.len(),
        result.mentions.total()
    );
    result
}
