//! Port traits implemented by adapters.

pub mod comment_port;
pub mod config_port;
pub mod polarity_port;
pub mod report_port;
pub mod thread_port;
