#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;
use std::io::Write;

use wsb_sentiment::domain::config::AnalysisConfig;
use wsb_sentiment::domain::error::{RetrievalError, ScoringError, WsbError};
use wsb_sentiment::ports::comment_port::CommentPort;
use wsb_sentiment::ports::polarity_port::PolarityScorer;

/// In-memory comment source.
pub struct MockCommentPort {
    pub title: String,
    pub comments: Vec<String>,
    pub error: Option<String>,
    pub calls: Cell<usize>,
}

impl MockCommentPort {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            comments: Vec::new(),
            error: None,
            calls: Cell::new(0),
        }
    }

    pub fn with_comments(mut self, comments: &[&str]) -> Self {
        self.comments = comments.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl CommentPort for MockCommentPort {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn fetch_comments(&self, limit: usize) -> Result<Vec<String>, WsbError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(reason) = &self.error {
            return Err(RetrievalError::Http {
                reason: reason.clone(),
            }
            .into());
        }
        Ok(self.comments.iter().take(limit).cloned().collect())
    }
}

/// Always returns the same polarity.
pub struct FixedScorer(pub f64);

impl PolarityScorer for FixedScorer {
    fn polarity(&self, _text: &str) -> Result<f64, ScoringError> {
        Ok(self.0)
    }
}

/// Polarity looked up per exact comment text; unknown text is neutral.
pub struct TableScorer {
    pub scores: HashMap<String, f64>,
}

impl TableScorer {
    pub fn new(entries: &[(&str, f64)]) -> Self {
        Self {
            scores: entries
                .iter()
                .map(|(text, score)| (text.to_string(), *score))
                .collect(),
        }
    }
}

impl PolarityScorer for TableScorer {
    fn polarity(&self, text: &str) -> Result<f64, ScoringError> {
        Ok(self.scores.get(text).copied().unwrap_or(0.0))
    }
}

/// Fails on every comment containing `marker`.
pub struct FlakyScorer {
    pub marker: String,
}

impl PolarityScorer for FlakyScorer {
    fn polarity(&self, text: &str) -> Result<f64, ScoringError> {
        if text.contains(&self.marker) {
            Err(ScoringError::Malformed {
                reason: "scorer unavailable".into(),
            })
        } else {
            Ok(0.0)
        }
    }
}

pub fn neutral() -> FixedScorer {
    FixedScorer(0.0)
}

pub fn default_config() -> AnalysisConfig {
    AnalysisConfig::default()
}

pub fn write_temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
