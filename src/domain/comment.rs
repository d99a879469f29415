//! Comment clean-up between retrieval and analysis.

/// Bodies the platform substitutes for deleted or moderated comments.
pub const REMOVED_SENTINELS: &[&str] = &["[deleted]", "[removed]"];

pub fn is_removed(body: &str) -> bool {
    REMOVED_SENTINELS.contains(&body.trim())
}

/// Take the first `limit` raw bodies and drop deleted/removed ones.
///
/// The limit applies before filtering, so fewer than `limit` comments may
/// come back.
pub fn prepare_comments(raw: Vec<String>, limit: usize) -> Vec<String> {
    let fetched = raw.len();
    let comments: Vec<String> = raw
        .into_iter()
        .take(limit)
        .filter(|body| !is_removed(body))
        .collect();

    tracing::info!(
        "Processing {} valid comments ({} fetched)",
        comments.len(),
        fetched
    );
    if comments.is_empty() {
        tracing::warn!("no valid comments found; check the thread or input file");
    }
    comments
}
