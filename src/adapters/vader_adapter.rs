//! VADER polarity scorer.
//!
//! Wraps the VADER (Valence Aware Dictionary and sEntiment Reasoner) compound
//! score, which is tuned for short social-media text. No financial keyword
//! boosting happens here; the classifier's lexicons cover that separately.

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::domain::error::ScoringError;
use crate::ports::polarity_port::PolarityScorer;

pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    fn compound(&self, text: &str) -> Result<f64, ScoringError> {
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .ok_or_else(|| ScoringError::Malformed {
                reason: "scorer returned no compound score".to_string(),
            })
    }

    /// True if at least one word has a valence of its own. Punctuation and
    /// capitals only amplify existing sentiment, so without such a word the
    /// comment is neutral.
    fn carries_sentiment(&self, text: &str) -> bool {
        text.split_whitespace()
            .map(|word| word.trim_matches(|c: char| c.is_ascii_punctuation()))
            .filter(|word| !word.is_empty())
            .any(|word| self.compound(word).is_ok_and(|c| c != 0.0))
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity(&self, text: &str) -> Result<f64, ScoringError> {
        if text.trim().is_empty() {
            return Ok(0.0);
        }
        if text.contains('\0') {
            return Err(ScoringError::Malformed {
                reason: "embedded NUL byte".to_string(),
            });
        }

        if !self.carries_sentiment(text) {
            return Ok(0.0);
        }

        let compound = self.compound(text)?;
        if !compound.is_finite() {
            return Err(ScoringError::NonFinite(compound));
        }
        Ok(compound.clamp(-1.0, 1.0))
    }
}
