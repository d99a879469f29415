//! Built-in HTML report template with `{{PLACEHOLDER}}` markers.

pub const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{TITLE}} - Ticker Sentiment</title>
<style>
  body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 800px; color: #222; }
  table { border-collapse: collapse; margin: 1rem 0; }
  th, td { border: 1px solid #ccc; padding: 0.3rem 0.8rem; text-align: left; }
  tr.bullish td:nth-child(2) { color: #2e9e4f; }
  tr.bearish td:nth-child(2) { color: #d64545; }
  .meta { color: #777; font-size: 0.9rem; }
</style>
</head>
<body>
<h1>{{TITLE}}</h1>
<p class="meta">Generated {{GENERATED_AT}}</p>

<h2>Summary</h2>
{{RUN_SUMMARY}}

<h2>Top Mentioned Tickers</h2>
{{MENTIONS_CHART_SVG}}
{{MENTIONS_TABLE}}

<h2>Bullish vs Bearish Sentiment</h2>
{{SENTIMENT_CHART_SVG}}
{{SENTIMENT_TABLE}}

<p class="meta">Sentiment is a lexical heuristic over keywords and comment polarity. It is approximate.</p>
</body>
</html>
"#;

/// The built-in template.
pub fn template() -> &'static str {
    TEMPLATE
}
