//! Discussion thread discovery and download port.

use crate::domain::error::WsbError;
use crate::domain::thread::{ThreadComments, ThreadSummary};

pub trait ThreadPort {
    /// Newest threads in a community, newest first.
    fn recent_threads(&self, community: &str, limit: usize)
    -> Result<Vec<ThreadSummary>, WsbError>;

    /// Title and raw comment bodies for one thread.
    fn fetch_thread(&self, thread_id: &str, limit: usize) -> Result<ThreadComments, WsbError>;
}
