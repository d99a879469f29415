//! Ranked views over an [`AnalysisResult`] for reporting.

use std::fmt;

use crate::domain::aggregator::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Bullish,
    Bearish,
    Neutral,
}

impl SentimentLabel {
    /// Strictly greater count wins; a tie is neutral.
    pub fn from_counts(bullish: u64, bearish: u64) -> Self {
        if bullish > bearish {
            SentimentLabel::Bullish
        } else if bearish > bullish {
            SentimentLabel::Bearish
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Bullish => "Bullish",
            SentimentLabel::Bearish => "Bearish",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerMentions {
    pub ticker: String,
    pub mentions: u64,
    pub bullish: u64,
    pub bearish: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerSentiment {
    pub ticker: String,
    pub mentions: u64,
    pub bullish: u64,
    pub bearish: u64,
    pub label: SentimentLabel,
}

impl TickerSentiment {
    /// Directional mentions: bullish plus bearish.
    pub fn directional(&self) -> u64 {
        self.bullish + self.bearish
    }
}

/// Top `n` tickers by mention count, ties in first-encountered order.
pub fn most_mentioned(result: &AnalysisResult, n: usize) -> Vec<TickerMentions> {
    result
        .mentions
        .most_common(n)
        .into_iter()
        .map(|(ticker, mentions)| TickerMentions {
            ticker: ticker.to_string(),
            mentions,
            bullish: result.bullish.get(ticker),
            bearish: result.bearish.get(ticker),
        })
        .collect()
}

/// Tickers with at least `min_mentions` directional mentions.
///
/// Ordered by directional mentions, descending; ties in first-encountered order.
pub fn sentiment_summary(result: &AnalysisResult, min_mentions: u64) -> Vec<TickerSentiment> {
    let mut rows: Vec<TickerSentiment> = result
        .mentions
        .iter()
        .filter_map(|(ticker, mentions)| {
            let bullish = result.bullish.get(ticker);
            let bearish = result.bearish.get(ticker);
            (bullish + bearish >= min_mentions && bullish + bearish > 0).then(|| TickerSentiment {
                ticker: ticker.to_string(),
                mentions,
                bullish,
                bearish,
                label: SentimentLabel::from_counts(bullish, bearish),
            })
        })
        .collect();
    rows.sort_by(|a, b| b.directional().cmp(&a.directional()));
    rows
}

/// Everything a report renderer needs, detached from the counters.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentReport {
    pub title: String,
    pub generated_at: String,
    pub comments_analyzed: usize,
    pub unscored_comments: usize,
    pub unique_tickers: usize,
    pub total_mentions: u64,
    pub bullish_mentions: u64,
    pub bearish_mentions: u64,
    pub top_mentions: Vec<TickerMentions>,
    pub sentiment: Vec<TickerSentiment>,
}

impl SentimentReport {
    pub fn is_empty(&self) -> bool {
        self.top_mentions.is_empty()
    }
}

pub fn build_report(
    result: &AnalysisResult,
    title: &str,
    top_n: usize,
    min_mentions: u64,
) -> SentimentReport {
    SentimentReport {
        title: title.to_string(),
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
        comments_analyzed: result.comments_analyzed,
        unscored_comments: result.unscored_comments,
        unique_tickers: result.mentions.len(),
        total_mentions: result.mentions.total(),
        bullish_mentions: result.bullish.total(),
        bearish_mentions: result.bearish.total(),
        top_mentions: most_mentioned(result, top_n),
        sentiment: sentiment_summary(result, min_mentions),
    }
}
