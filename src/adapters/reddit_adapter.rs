//! Reddit public JSON adapter.
//!
//! Uses the unauthenticated `.json` listing endpoints. The comment tree is
//! flattened breadth-first, top-level comments first, and "load more" stubs
//! are dropped rather than expanded.

use std::collections::VecDeque;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::error::{RetrievalError, WsbError};
use crate::domain::thread::{ThreadComments, ThreadSummary};
use crate::ports::config_port::ConfigPort;
use crate::ports::thread_port::ThreadPort;

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";
pub const DEFAULT_USER_AGENT: &str = "wsb-earnings-sentiment/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    id: String,
    title: String,
}

pub struct RedditAdapter {
    client: Client,
    base_url: String,
}

impl RedditAdapter {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, WsbError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()
            .map_err(http_error)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, WsbError> {
        let base_url = config
            .get_string("reddit", "base_url")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let user_agent = config
            .get_string("reddit", "user_agent")
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        Self::new(&base_url, &user_agent)
    }

    fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, WsbError> {
        tracing::debug!("GET {url}");
        let response = self.client.get(url).query(query).send().map_err(http_error)?;

        if !response.status().is_success() {
            return Err(RetrievalError::Http {
                reason: format!("{url} returned {}", response.status()),
            }
            .into());
        }

        response.json::<Value>().map_err(|e| {
            RetrievalError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl ThreadPort for RedditAdapter {
    fn recent_threads(
        &self,
        community: &str,
        limit: usize,
    ) -> Result<Vec<ThreadSummary>, WsbError> {
        let url = format!("{}/r/{}/new.json", self.base_url, community);
        let body = self.get_json(&url, &[("limit", limit.min(100).to_string())])?;
        Ok(parse_thread_listing(body)?)
    }

    fn fetch_thread(&self, thread_id: &str, limit: usize) -> Result<ThreadComments, WsbError> {
        let url = format!("{}/comments/{}.json", self.base_url, thread_id);
        let body = self.get_json(
            &url,
            &[("limit", limit.to_string()), ("raw_json", "1".to_string())],
        )?;
        let thread = parse_thread_comments(&body)?;
        tracing::info!(
            "Found {} comments in thread: {}",
            thread.bodies.len(),
            thread.title
        );
        Ok(thread)
    }
}

fn http_error(e: reqwest::Error) -> WsbError {
    RetrievalError::Http {
        reason: e.to_string(),
    }
    .into()
}

fn parse_error(reason: impl Into<String>) -> RetrievalError {
    RetrievalError::Parse {
        reason: reason.into(),
    }
}

/// Parse a `/r/<community>/new.json` listing.
pub fn parse_thread_listing(body: Value) -> Result<Vec<ThreadSummary>, RetrievalError> {
    let listing: Listing = serde_json::from_value(body).map_err(|e| parse_error(e.to_string()))?;
    Ok(listing
        .data
        .children
        .into_iter()
        .map(|child| ThreadSummary {
            id: child.data.id,
            title: child.data.title,
        })
        .collect())
}

/// Parse a `/comments/<id>.json` response: `[post listing, comment listing]`.
pub fn parse_thread_comments(body: &Value) -> Result<ThreadComments, RetrievalError> {
    let parts = body
        .as_array()
        .filter(|parts| parts.len() >= 2)
        .ok_or_else(|| parse_error("expected [post, comments] array"))?;

    let title = parts[0]["data"]["children"][0]["data"]["title"]
        .as_str()
        .ok_or_else(|| parse_error("thread title missing"))?
        .to_string();

    Ok(ThreadComments {
        title,
        bodies: flatten_comments(&parts[1]),
    })
}

/// Breadth-first walk over a comment listing, skipping non-comment nodes.
pub fn flatten_comments(listing: &Value) -> Vec<String> {
    let mut bodies = Vec::new();
    let mut queue: VecDeque<&Value> = children(listing).collect();

    while let Some(node) = queue.pop_front() {
        if node["kind"] != "t1" {
            continue;
        }
        let data = &node["data"];
        if let Some(body) = data["body"].as_str() {
            bodies.push(body.to_string());
        }
        // "replies" is an empty string when there are none
        queue.extend(children(&data["replies"]));
    }
    bodies
}

fn children(listing: &Value) -> impl Iterator<Item = &Value> {
    listing["data"]["children"]
        .as_array()
        .into_iter()
        .flatten()
}
