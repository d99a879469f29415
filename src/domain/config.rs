//! Analysis run parameters.

use crate::domain::exclusion::ExclusionSet;
use crate::domain::sentiment::SentimentConfig;

pub const DEFAULT_MAX_COMMENTS: usize = 500;
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_MIN_SENTIMENT_MENTIONS: u64 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub max_comments: usize,
    pub top_n: usize,
    /// Minimum bullish + bearish count for a ticker to appear in the sentiment summary.
    pub min_sentiment_mentions: u64,
    pub exclusions: ExclusionSet,
    pub sentiment: SentimentConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_comments: DEFAULT_MAX_COMMENTS,
            top_n: DEFAULT_TOP_N,
            min_sentiment_mentions: DEFAULT_MIN_SENTIMENT_MENTIONS,
            exclusions: ExclusionSet::default(),
            sentiment: SentimentConfig::default(),
        }
    }
}
