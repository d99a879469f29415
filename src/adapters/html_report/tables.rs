//! HTML table fragments for reports.
//!
//! Provides functions to generate markup for:
//! - Run summary (comments, tickers, directional totals)
//! - Top mentions ranking
//! - Per-ticker bullish/bearish breakdown

use crate::domain::report::{SentimentReport, TickerMentions, TickerSentiment};

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_run_summary(report: &SentimentReport) -> String {
    let rows = [
        ("Comments analyzed", report.comments_analyzed.to_string()),
        ("Unscored comments", report.unscored_comments.to_string()),
        ("Unique tickers", report.unique_tickers.to_string()),
        ("Total mentions", report.total_mentions.to_string()),
        ("Bullish mentions", report.bullish_mentions.to_string()),
        ("Bearish mentions", report.bearish_mentions.to_string()),
    ];

    let mut html = String::from("<table class=\"summary\">\n");
    for (name, value) in rows {
        html.push_str(&format!("  <tr><th>{name}</th><td>{value}</td></tr>\n"));
    }
    html.push_str("</table>\n");
    html
}

pub fn render_mentions_table(top: &[TickerMentions]) -> String {
    if top.is_empty() {
        return "<p><em>No tickers found.</em></p>\n".to_string();
    }

    let mut html = String::from(
        "<table>\n  <tr><th>Rank</th><th>Ticker</th><th>Mentions</th></tr>\n",
    );
    for (i, t) in top.iter().enumerate() {
        html.push_str(&format!(
            "  <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            i + 1,
            escape_html(&t.ticker),
            t.mentions
        ));
    }
    html.push_str("</table>\n");
    html
}

pub fn render_sentiment_table(rows: &[TickerSentiment]) -> String {
    if rows.is_empty() {
        return "<p><em>No tickers with sufficient sentiment data.</em></p>\n".to_string();
    }

    let mut html = String::from(
        "<table>\n  <tr><th>Ticker</th><th>Sentiment</th><th>Bullish</th><th>Bearish</th><th>Mentions</th></tr>\n",
    );
    for row in rows {
        let class = row.label.to_string().to_lowercase();
        html.push_str(&format!(
            "  <tr class=\"{class}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&row.ticker),
            row.label,
            row.bullish,
            row.bearish,
            row.mentions
        ));
    }
    html.push_str("</table>\n");
    html
}
