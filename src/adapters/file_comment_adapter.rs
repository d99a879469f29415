//! Comment file adapter.
//!
//! Reads previously exported comments from disk. `.csv` files use the `body`
//! column when the header has one, otherwise the first column. Any other
//! extension is read as plain text with one comment per line.

use crate::domain::error::{RetrievalError, WsbError};
use crate::ports::comment_port::CommentPort;
use std::fs;
use std::path::PathBuf;

pub struct FileCommentAdapter {
    path: PathBuf,
}

impl FileCommentAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn is_csv(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    }

    fn source_error(&self, reason: impl ToString) -> WsbError {
        RetrievalError::Source {
            source_name: self.path.display().to_string(),
            reason: reason.to_string(),
        }
        .into()
    }

    fn read_csv(&self, content: &str, limit: usize) -> Result<Vec<String>, WsbError> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = rdr.headers().map_err(|e| self.source_error(e))?;
        let column = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case("body"))
            .unwrap_or(0);

        let mut bodies = Vec::new();
        for result in rdr.records() {
            if bodies.len() >= limit {
                break;
            }
            let record = result.map_err(|e| self.source_error(format!("CSV parse error: {e}")))?;
            match record.get(column) {
                Some(body) if !body.trim().is_empty() => bodies.push(body.to_string()),
                _ => continue,
            }
        }
        Ok(bodies)
    }

    fn read_lines(content: &str, limit: usize) -> Vec<String> {
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .take(limit)
            .map(str::to_string)
            .collect()
    }
}

impl CommentPort for FileCommentAdapter {
    fn title(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    fn fetch_comments(&self, limit: usize) -> Result<Vec<String>, WsbError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.source_error(e))?;
        let bodies = if self.is_csv() {
            self.read_csv(&content, limit)?
        } else {
            Self::read_lines(&content, limit)
        };
        tracing::info!("Read {} comments from {}", bodies.len(), self.path.display());
        Ok(bodies)
    }
}
