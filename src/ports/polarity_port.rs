//! Polarity scoring port.

use crate::domain::error::ScoringError;

/// General-purpose text sentiment scorer.
///
/// Returns a polarity in `[-1.0, 1.0]`: positive is a favorable tone,
/// negative an unfavorable one, with no financial interpretation.
pub trait PolarityScorer {
    fn polarity(&self, text: &str) -> Result<f64, ScoringError>;
}
