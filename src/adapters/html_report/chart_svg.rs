//! Inline SVG bar charts for HTML reports.

use crate::domain::report::{TickerMentions, TickerSentiment};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 320.0;
const PADDING: f64 = 48.0;

const MENTIONS_COLOR: &str = "#f0a030";
const BULLISH_COLOR: &str = "#2e9e4f";
const BEARISH_COLOR: &str = "#d64545";

struct Frame {
    plot_width: f64,
    plot_height: f64,
    slot: f64,
    bar_width: f64,
    scale_y: f64,
}

impl Frame {
    fn new(bars: usize, max_value: u64) -> Self {
        let plot_width = WIDTH - 2.0 * PADDING;
        let plot_height = HEIGHT - 2.0 * PADDING;
        let slot = plot_width / bars.max(1) as f64;
        Self {
            plot_width,
            plot_height,
            slot,
            bar_width: slot * 0.7,
            scale_y: if max_value > 0 {
                plot_height / max_value as f64
            } else {
                0.0
            },
        }
    }

    fn bar_x(&self, i: usize) -> f64 {
        PADDING + i as f64 * self.slot + (self.slot - self.bar_width) / 2.0
    }

    fn baseline(&self) -> f64 {
        PADDING + self.plot_height
    }

    fn axes(&self) -> String {
        let base = self.baseline();
        format!(
            r##"<line x1="{p:.1}" y1="{p:.1}" x2="{p:.1}" y2="{base:.1}" stroke="#333"/><line x1="{p:.1}" y1="{base:.1}" x2="{right:.1}" y2="{base:.1}" stroke="#333"/>"##,
            p = PADDING,
            base = base,
            right = PADDING + self.plot_width,
        )
    }

    fn label(&self, i: usize, text: &str) -> String {
        let x = self.bar_x(i) + self.bar_width / 2.0;
        let y = self.baseline() + 16.0;
        format!(
            r#"<text x="{x:.1}" y="{y:.1}" font-size="11" text-anchor="end" transform="rotate(-45 {x:.1} {y:.1})">{text}</text>"#
        )
    }
}

fn open_svg(caption: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w:.0} {h:.0}" width="{w:.0}" height="{h:.0}" role="img" aria-label="{caption}"><title>{caption}</title>"#,
        w = WIDTH,
        h = HEIGHT + 40.0,
    )
}

fn rect(x: f64, y: f64, width: f64, height: f64, color: &str, tooltip: &str) -> String {
    format!(
        r#"<rect x="{x:.1}" y="{y:.1}" width="{width:.1}" height="{height:.1}" fill="{color}" fill-opacity="0.8"><title>{tooltip}</title></rect>"#
    )
}

/// Bar chart of total mentions. Empty string when there is nothing to plot.
pub fn generate_mentions_svg(top: &[TickerMentions]) -> String {
    if top.is_empty() {
        return String::new();
    }

    let max = top.iter().map(|t| t.mentions).max().unwrap_or(0);
    let frame = Frame::new(top.len(), max);
    let mut svg = open_svg("Top Mentioned Tickers");
    svg.push_str(&frame.axes());

    for (i, t) in top.iter().enumerate() {
        let h = t.mentions as f64 * frame.scale_y;
        svg.push_str(&rect(
            frame.bar_x(i),
            frame.baseline() - h,
            frame.bar_width,
            h,
            MENTIONS_COLOR,
            &format!("{}: {} mentions", t.ticker, t.mentions),
        ));
        svg.push_str(&frame.label(i, &t.ticker));
    }

    svg.push_str("</svg>");
    svg
}

/// Stacked bullish (bottom) and bearish (top) bars per ticker.
pub fn generate_sentiment_svg(rows: &[TickerSentiment]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let max = rows.iter().map(TickerSentiment::directional).max().unwrap_or(0);
    let frame = Frame::new(rows.len(), max);
    let mut svg = open_svg("Bullish vs Bearish Sentiment by Ticker");
    svg.push_str(&frame.axes());

    for (i, row) in rows.iter().enumerate() {
        let x = frame.bar_x(i);
        let bull_h = row.bullish as f64 * frame.scale_y;
        let bear_h = row.bearish as f64 * frame.scale_y;
        let bull_top = frame.baseline() - bull_h;
        svg.push_str(&rect(
            x,
            bull_top,
            frame.bar_width,
            bull_h,
            BULLISH_COLOR,
            &format!("{}: {} bullish", row.ticker, row.bullish),
        ));
        svg.push_str(&rect(
            x,
            bull_top - bear_h,
            frame.bar_width,
            bear_h,
            BEARISH_COLOR,
            &format!("{}: {} bearish", row.ticker, row.bearish),
        ));
        svg.push_str(&frame.label(i, &row.ticker));
    }

    svg.push_str(&format!(
        r#"<rect x="{x:.1}" y="12" width="10" height="10" fill="{BULLISH_COLOR}"/><text x="{tx:.1}" y="21" font-size="11">Bullish/Calls</text><rect x="{x2:.1}" y="12" width="10" height="10" fill="{BEARISH_COLOR}"/><text x="{tx2:.1}" y="21" font-size="11">Bearish/Puts</text>"#,
        x = WIDTH - 220.0,
        tx = WIDTH - 205.0,
        x2 = WIDTH - 110.0,
        tx2 = WIDTH - 95.0,
    ));
    svg.push_str("</svg>");
    svg
}
