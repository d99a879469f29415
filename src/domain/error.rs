//! Domain error types.

/// Polarity scoring failed for a single comment.
///
/// Never fatal: the classifier treats the comment as carrying no direction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("scorer produced a non-finite polarity ({0})")]
    NonFinite(f64),

    #[error("malformed comment text: {reason}")]
    Malformed { reason: String },
}

/// Failures while locating a thread or downloading its comments.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("http error: {reason}")]
    Http { reason: String },

    #[error("unexpected response format: {reason}")]
    Parse { reason: String },

    #[error("no thread matching {keywords:?} in r/{subreddit}")]
    ThreadNotFound {
        subreddit: String,
        keywords: Vec<String>,
    },

    #[error("invalid thread reference: {input:?}")]
    InvalidThreadRef { input: String },

    #[error("failed to read comments from {source_name}: {reason}")]
    Source { source_name: String, reason: String },
}

/// Top-level error type for wsb-sentiment.
#[derive(Debug, thiserror::Error)]
pub enum WsbError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("no comments to analyze")]
    NoComments,

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&WsbError> for std::process::ExitCode {
    fn from(err: &WsbError) -> Self {
        let code: u8 = match err {
            WsbError::Io(_) | WsbError::Report { .. } => 1,
            WsbError::ConfigParse { .. }
            | WsbError::ConfigMissing { .. }
            | WsbError::ConfigInvalid { .. } => 2,
            WsbError::Retrieval(_) => 3,
            WsbError::Scoring(_) => 4,
            WsbError::NoComments => 5,
        };
        std::process::ExitCode::from(code)
    }
}
