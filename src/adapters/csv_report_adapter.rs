//! CSV report adapter: one row per mentioned ticker.

use std::fs;
use std::path::Path;

use crate::domain::error::WsbError;
use crate::domain::report::{SentimentLabel, SentimentReport};
use crate::ports::report_port::ReportPort;

pub const HEADER: [&str; 5] = ["ticker", "mentions", "bullish", "bearish", "label"];

#[derive(Default)]
pub struct CsvReportAdapter;

impl CsvReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

fn report_error(e: impl std::fmt::Display) -> WsbError {
    WsbError::Report {
        reason: e.to_string(),
    }
}

impl ReportPort for CsvReportAdapter {
    fn write(&self, report: &SentimentReport, output_path: &Path) -> Result<(), WsbError> {
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut wtr = csv::Writer::from_path(output_path).map_err(report_error)?;
        wtr.write_record(HEADER).map_err(report_error)?;

        for t in &report.top_mentions {
            wtr.write_record([
                t.ticker.clone(),
                t.mentions.to_string(),
                t.bullish.to_string(),
                t.bearish.to_string(),
                SentimentLabel::from_counts(t.bullish, t.bearish).to_string(),
            ])
            .map_err(report_error)?;
        }

        wtr.flush()?;
        Ok(())
    }
}
