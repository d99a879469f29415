//! Per-comment bullish/bearish classification.
//!
//! Two independent signals are combined: a general-purpose polarity score and
//! substring matches against bullish and bearish keyword lexicons. Either
//! signal is enough to mark a direction, so a comment can come out bullish,
//! bearish, both, or neither. The judgment applies to every ticker in the
//! comment; there is no per-ticker disambiguation.

use crate::domain::error::ScoringError;
use crate::ports::polarity_port::PolarityScorer;

pub const DEFAULT_BULLISH_THRESHOLD: f64 = 0.1;
pub const DEFAULT_BEARISH_THRESHOLD: f64 = -0.1;

pub const DEFAULT_BULLISH_KEYWORDS: &[&str] = &[
    "call",
    "calls",
    "bull",
    "bullish",
    "moon",
    "rocket",
    "pump",
    "buy",
    "long",
    "yolo",
    "diamond hands",
    "tendies",
    "gains",
    "profit",
    "green",
    "up",
    "rise",
    "squeeze",
    "gamma squeeze",
];

pub const DEFAULT_BEARISH_KEYWORDS: &[&str] = &[
    "put",
    "puts",
    "bear",
    "bearish",
    "dump",
    "sell",
    "short",
    "crash",
    "down",
    "fall",
    "loss",
    "red",
    "bag",
    "bagholder",
    "rekt",
    "paper hands",
];

/// Thresholds and lexicons for the classifier.
///
/// Keywords are matched as lowercase substrings of the lowercased comment, so
/// `up` also fires on `update`. That imprecision is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentConfig {
    pub bullish_threshold: f64,
    pub bearish_threshold: f64,
    pub bullish_keywords: Vec<String>,
    pub bearish_keywords: Vec<String>,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            bullish_threshold: DEFAULT_BULLISH_THRESHOLD,
            bearish_threshold: DEFAULT_BEARISH_THRESHOLD,
            bullish_keywords: to_owned(DEFAULT_BULLISH_KEYWORDS),
            bearish_keywords: to_owned(DEFAULT_BEARISH_KEYWORDS),
        }
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Directional judgment for one comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Direction {
    pub bullish: bool,
    pub bearish: bool,
}

impl Direction {
    pub const NEUTRAL: Direction = Direction {
        bullish: false,
        bearish: false,
    };

    pub fn is_mixed(&self) -> bool {
        self.bullish && self.bearish
    }
}

/// Keyword hits for a lowercased comment.
pub fn keyword_hits(lowered: &str, config: &SentimentConfig) -> Direction {
    let matches = |keywords: &[String]| {
        keywords
            .iter()
            .any(|k| !k.is_empty() && lowered.contains(k.as_str()))
    };
    Direction {
        bullish: matches(&config.bullish_keywords),
        bearish: matches(&config.bearish_keywords),
    }
}

/// Combine a known polarity with keyword hits.
pub fn direction_for(text: &str, polarity: f64, config: &SentimentConfig) -> Direction {
    let hits = keyword_hits(&text.to_lowercase(), config);
    Direction {
        bullish: hits.bullish || polarity > config.bullish_threshold,
        bearish: hits.bearish || polarity < config.bearish_threshold,
    }
}

/// Score and classify one comment.
///
/// A scoring failure is returned to the caller, which must then treat the
/// comment as [`Direction::NEUTRAL`].
pub fn classify(
    text: &str,
    config: &SentimentConfig,
    scorer: &dyn PolarityScorer,
) -> Result<Direction, ScoringError> {
    let polarity = scorer.polarity(text)?;
    if !polarity.is_finite() {
        return Err(ScoringError::NonFinite(polarity));
    }
    Ok(direction_for(text, polarity.clamp(-1.0, 1.0), config))
}
