//! Comment source port.

use crate::domain::error::WsbError;

/// A source of raw comment bodies for a single thread.
///
/// Bodies are returned as the source has them, deleted/removed sentinels
/// included; `domain::comment::prepare_comments` cleans them up.
pub trait CommentPort {
    /// Human-readable name of the thread or file, used in reports.
    fn title(&self) -> String;

    /// Fetch up to roughly `limit` raw bodies in source order.
    fn fetch_comments(&self, limit: usize) -> Result<Vec<String>, WsbError>;
}
