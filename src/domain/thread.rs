//! Thread discovery helpers.
//!
//! Picks the discussion thread to analyze from a listing of recent threads,
//! or resolves a thread reference typed in by the user.

use crate::domain::error::RetrievalError;

pub const DEFAULT_COMMUNITY: &str = "wallstreetbets";
pub const DEFAULT_SEARCH_LIMIT: usize = 50;
pub const DEFAULT_THREAD_KEYWORDS: &[&str] =
    &["weekly earnings", "earnings thread", "earnings discussion"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadSummary {
    pub id: String,
    pub title: String,
}

/// A downloaded thread: its title and raw comment bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadComments {
    pub title: String,
    pub bodies: Vec<String>,
}

/// First thread whose lowercased title contains any of `keywords`.
pub fn find_thread<'a, S: AsRef<str>>(
    threads: &'a [ThreadSummary],
    keywords: &[S],
) -> Option<&'a ThreadSummary> {
    threads.iter().find(|thread| {
        let title = thread.title.to_lowercase();
        keywords
            .iter()
            .any(|k| !k.as_ref().is_empty() && title.contains(&k.as_ref().to_lowercase()))
    })
}

/// Resolve a thread id from a bare id or a thread URL.
///
/// URLs must contain a `/comments/<id>` path segment.
pub fn parse_thread_ref(input: &str) -> Result<String, RetrievalError> {
    let input = input.trim();
    let invalid = || RetrievalError::InvalidThreadRef {
        input: input.to_string(),
    };

    if input.contains("://") || input.contains('/') {
        let mut segments = input.split('/').skip_while(|s| *s != "comments");
        segments.next().ok_or_else(invalid)?;
        let id = segments.next().filter(|s| is_thread_id(s)).ok_or_else(invalid)?;
        return Ok(id.to_string());
    }

    let id = input.strip_prefix("t3_").unwrap_or(input);
    if is_thread_id(id) {
        Ok(id.to_string())
    } else {
        Err(invalid())
    }
}

fn is_thread_id(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}
