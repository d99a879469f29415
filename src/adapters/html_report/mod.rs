//! HTML report generation.
//!
//! Reads a template (the built-in default or a custom file via
//! `[report] template_path`), resolves its `{{PLACEHOLDER}}` markers with
//! helpers from `chart_svg` and `tables`, and writes a self-contained page.

pub mod chart_svg;
pub mod default_template;
pub mod tables;

use std::fs;
use std::path::Path;

use crate::domain::error::WsbError;
use crate::domain::report::SentimentReport;
use crate::ports::report_port::ReportPort;

/// Resolve all `{{PLACEHOLDER}}`s in `template` for `report`.
pub fn resolve(template: &str, report: &SentimentReport) -> String {
    let mut output = template.to_string();

    output = output.replace("{{TITLE}}", &tables::escape_html(&report.title));
    output = output.replace("{{GENERATED_AT}}", &report.generated_at);
    output = output.replace("{{RUN_SUMMARY}}", &tables::render_run_summary(report));

    let mentions_svg = chart_svg::generate_mentions_svg(&report.top_mentions);
    output = output.replace("{{MENTIONS_CHART_SVG}}", &mentions_svg);
    output = output.replace(
        "{{MENTIONS_TABLE}}",
        &tables::render_mentions_table(&report.top_mentions),
    );

    let sentiment_svg = chart_svg::generate_sentiment_svg(&report.sentiment);
    output = output.replace("{{SENTIMENT_CHART_SVG}}", &sentiment_svg);
    output = output.replace(
        "{{SENTIMENT_TABLE}}",
        &tables::render_sentiment_table(&report.sentiment),
    );

    output
}

#[derive(Default)]
pub struct HtmlReportAdapter {
    template: Option<String>,
}

impl HtmlReportAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(template: String) -> Self {
        Self {
            template: Some(template),
        }
    }

    pub fn from_template_file(path: &Path) -> Result<Self, WsbError> {
        let template = fs::read_to_string(path).map_err(|e| WsbError::Report {
            reason: format!("failed to read template {}: {}", path.display(), e),
        })?;
        Ok(Self::with_template(template))
    }
}

impl ReportPort for HtmlReportAdapter {
    fn write(&self, report: &SentimentReport, output_path: &Path) -> Result<(), WsbError> {
        let template = self
            .template
            .as_deref()
            .unwrap_or_else(|| default_template::template());
        let html = resolve(template, report);

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, html).map_err(|e| WsbError::Report {
            reason: format!("failed to write {}: {}", output_path.display(), e),
        })
    }
}
