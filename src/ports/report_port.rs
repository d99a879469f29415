//! Report generation port.

use crate::domain::error::WsbError;
use crate::domain::report::SentimentReport;
use std::path::Path;

/// Port for writing analysis reports.
pub trait ReportPort {
    fn write(&self, report: &SentimentReport, output_path: &Path) -> Result<(), WsbError>;
}
