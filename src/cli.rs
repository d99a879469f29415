//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_comment_adapter::FileCommentAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::html_report::HtmlReportAdapter;
use crate::adapters::vader_adapter::VaderScorer;
use crate::domain::aggregator::{analyze_comments, valid_tickers};
use crate::domain::comment::prepare_comments;
use crate::domain::config::AnalysisConfig;
use crate::domain::config_validation::validate_analysis_config;
use crate::domain::error::WsbError;
use crate::domain::exclusion::{unmatchable_words, ExclusionSet};
use crate::domain::report::{build_report, SentimentReport};
use crate::domain::sentiment::{self, SentimentConfig};
use crate::domain::ticker::extract_tickers;
use crate::ports::comment_port::CommentPort;
use crate::ports::config_port::ConfigPort;
use crate::ports::polarity_port::PolarityScorer;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(
    name = "wsb-sentiment",
    about = "Ticker mention and bullish/bearish sentiment analysis for discussion threads"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze the comments of one thread
    Analyze {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Comment file (.csv with a `body` column, or one comment per line)
        #[arg(short, long, conflicts_with_all = ["thread", "subreddit"])]
        input: Option<PathBuf>,
        /// Thread id or URL
        #[arg(short, long)]
        thread: Option<String>,
        /// Community to search for the latest earnings thread
        #[arg(long, conflicts_with = "thread")]
        subreddit: Option<String>,
        #[arg(long)]
        title: Option<String>,
        /// Report file; `.csv` writes a table, anything else HTML
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        max_comments: Option<usize>,
        #[arg(long)]
        top_n: Option<usize>,
        #[arg(long)]
        min_mentions: Option<u64>,
    },
    /// Show extracted tickers and the classification of a single comment
    Tickers {
        text: String,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub max_comments: Option<usize>,
    pub top_n: Option<usize>,
    pub min_mentions: Option<u64>,
}

/// Where comments come from, after merging flags and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    File(PathBuf),
    Thread(String),
    Discover { subreddit: String },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Analyze {
            config,
            input,
            thread,
            subreddit,
            title,
            output,
            max_comments,
            top_n,
            min_mentions,
        } => {
            let overrides = Overrides {
                max_comments,
                top_n,
                min_mentions,
            };
            run_analyze(
                config.as_ref(),
                input,
                thread,
                subreddit,
                title,
                output,
                &overrides,
            )
        }
        Command::Tickers { text, config } => run_tickers(&text, config.as_ref()),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, ExitCode> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            FileConfigAdapter::from_file(path).map_err(|err| {
                eprintln!("error: {err}");
                ExitCode::from(&err)
            })
        }
        None => Ok(FileConfigAdapter::empty()),
    }
}

/// Build the analysis parameters from config, falling back to defaults.
pub fn build_analysis_config(config: &dyn ConfigPort) -> Result<AnalysisConfig, WsbError> {
    validate_analysis_config(config)?;
    let defaults = AnalysisConfig::default();

    let uppercased = |key: &str| -> Option<Vec<String>> {
        let words: Vec<String> = config
            .get_list("exclusions", key)?
            .iter()
            .map(|w| w.to_uppercase())
            .collect();
        for word in unmatchable_words(&words) {
            tracing::warn!("[exclusions] {key}: {word:?} can never match a ticker");
        }
        Some(words)
    };
    let mut exclusions = match uppercased("words") {
        Some(words) => ExclusionSet::from_words(words),
        None => ExclusionSet::default(),
    };
    if let Some(extra) = uppercased("extra_words") {
        exclusions.extend(extra);
    }

    let lowered = |words: Vec<String>| -> Vec<String> {
        words.into_iter().map(|w| w.to_lowercase()).collect()
    };
    let sentiment = SentimentConfig {
        bullish_threshold: config.get_double(
            "sentiment",
            "bullish_threshold",
            defaults.sentiment.bullish_threshold,
        ),
        bearish_threshold: config.get_double(
            "sentiment",
            "bearish_threshold",
            defaults.sentiment.bearish_threshold,
        ),
        bullish_keywords: config
            .get_list("sentiment", "bullish_keywords")
            .map(lowered)
            .unwrap_or(defaults.sentiment.bullish_keywords),
        bearish_keywords: config
            .get_list("sentiment", "bearish_keywords")
            .map(lowered)
            .unwrap_or(defaults.sentiment.bearish_keywords),
    };

    Ok(AnalysisConfig {
        max_comments: config.get_int("analysis", "max_comments", defaults.max_comments as i64)
            as usize,
        top_n: config.get_int("analysis", "top_n", defaults.top_n as i64) as usize,
        min_sentiment_mentions: config.get_int(
            "analysis",
            "min_sentiment_mentions",
            defaults.min_sentiment_mentions as i64,
        ) as u64,
        exclusions,
        sentiment,
    })
}

/// Apply command-line overrides on top of a built config.
pub fn apply_overrides(
    mut config: AnalysisConfig,
    overrides: &Overrides,
) -> Result<AnalysisConfig, WsbError> {
    let positive = |key: &str, value: usize| {
        if value == 0 {
            Err(WsbError::ConfigInvalid {
                section: "analysis".into(),
                key: key.into(),
                reason: format!("{key} must be positive"),
            })
        } else {
            Ok(value)
        }
    };
    if let Some(n) = overrides.max_comments {
        config.max_comments = positive("max_comments", n)?;
    }
    if let Some(n) = overrides.top_n {
        config.top_n = positive("top_n", n)?;
    }
    if let Some(n) = overrides.min_mentions {
        config.min_sentiment_mentions = n;
    }
    Ok(config)
}

/// Decide where comments come from: flags first, then `[input]`/`[reddit]` config.
pub fn resolve_source(
    input: Option<PathBuf>,
    thread: Option<String>,
    subreddit: Option<String>,
    config: &dyn ConfigPort,
) -> Result<SourceSpec, WsbError> {
    if let Some(path) = input {
        return Ok(SourceSpec::File(path));
    }
    if let Some(thread) = thread {
        return Ok(SourceSpec::Thread(thread));
    }
    if let Some(subreddit) = subreddit {
        return Ok(SourceSpec::Discover { subreddit });
    }
    if let Some(path) = config.get_string("input", "path") {
        return Ok(SourceSpec::File(PathBuf::from(path)));
    }
    if let Some(thread) = config.get_string("reddit", "thread") {
        return Ok(SourceSpec::Thread(thread));
    }
    if cfg!(feature = "reddit") {
        let subreddit = config
            .get_string("reddit", "subreddit")
            .unwrap_or_else(|| crate::domain::thread::DEFAULT_COMMUNITY.to_string());
        return Ok(SourceSpec::Discover { subreddit });
    }
    Err(WsbError::ConfigMissing {
        section: "input".into(),
        key: "path".into(),
    })
}

/// Retrieval stage: fetch raw bodies and a display title for the chosen source.
fn fetch_raw_comments(
    source: &SourceSpec,
    config: &dyn ConfigPort,
    limit: usize,
) -> Result<(String, Vec<String>), WsbError> {
    match source {
        SourceSpec::File(path) => {
            let adapter = FileCommentAdapter::new(path.clone());
            Ok((adapter.title(), adapter.fetch_comments(limit)?))
        }
        #[cfg(feature = "reddit")]
        SourceSpec::Thread(reference) => reddit::fetch_thread(reference, config, limit),
        #[cfg(feature = "reddit")]
        SourceSpec::Discover { subreddit } => reddit::discover_and_fetch(subreddit, config, limit),
        #[cfg(not(feature = "reddit"))]
        SourceSpec::Thread(_) | SourceSpec::Discover { .. } => {
            let _ = (config, limit);
            Err(WsbError::ConfigInvalid {
                section: "input".into(),
                key: "source".into(),
                reason: "reddit feature is required to fetch threads".into(),
            })
        }
    }
}

fn run_analyze(
    config_path: Option<&PathBuf>,
    input: Option<PathBuf>,
    thread: Option<String>,
    subreddit: Option<String>,
    title_override: Option<String>,
    output_override: Option<PathBuf>,
    overrides: &Overrides,
) -> ExitCode {
    // Stage 1: Load and build config
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let config = match build_analysis_config(&adapter).and_then(|c| apply_overrides(c, overrides))
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 2: Retrieve comments
    let source = match resolve_source(input, thread, subreddit, &adapter) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let (source_title, raw) = match fetch_raw_comments(&source, &adapter, config.max_comments) {
        Ok(fetched) => fetched,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let title = title_override
        .or_else(|| adapter.get_string("input", "title"))
        .unwrap_or(source_title);

    let comments = prepare_comments(raw, config.max_comments);
    if comments.is_empty() {
        let err = WsbError::NoComments;
        eprintln!("error: {err}");
        return (&err).into();
    }

    // Stage 3: Analyze
    let scorer = VaderScorer::new();
    let result = analyze_comments(&comments, &config, &scorer);
    let report = build_report(&result, &title, config.top_n, config.min_sentiment_mentions);

    // Stage 4: Console summary
    print_summary(&report);

    // Stage 5: Report file
    let output = output_override.or_else(|| adapter.get_string("report", "output").map(PathBuf::from));
    if let Some(path) = output {
        if let Err(e) = write_report(&report, &path, &adapter) {
            eprintln!("error: {e}");
            print_data_summary(&report);
            return (&e).into();
        }
        tracing::info!("Report written to {}", path.display());
    }

    ExitCode::SUCCESS
}

/// Pick a report adapter from the output extension and write.
pub fn write_report(
    report: &SentimentReport,
    path: &Path,
    config: &dyn ConfigPort,
) -> Result<(), WsbError> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        return CsvReportAdapter::new().write(report, path);
    }

    let html = match config.get_string("report", "template_path") {
        Some(template) => HtmlReportAdapter::from_template_file(Path::new(&template))?,
        None => HtmlReportAdapter::new(),
    };
    html.write(report, path)
}

/// Console rendering of a report.
pub fn format_summary(report: &SentimentReport) -> String {
    let mut out = String::new();

    if report.is_empty() {
        out.push_str("No tickers found.\n");
        return out;
    }

    out.push_str(&format!("=== Top Mentioned Tickers: {} ===\n", report.title));
    for (i, t) in report.top_mentions.iter().enumerate() {
        out.push_str(&format!("{:>3}. {:<6} {}\n", i + 1, t.ticker, t.mentions));
    }

    out.push_str("\n=== Sentiment Summary ===\n");
    if report.sentiment.is_empty() {
        out.push_str("No tickers with sufficient sentiment data.\n");
    }
    for row in report.sentiment.iter().take(report.top_mentions.len()) {
        out.push_str(&format!(
            "{}: {} ({}B/{}R, Total: {})\n",
            row.ticker,
            row.label,
            row.bullish,
            row.bearish,
            row.directional()
        ));
    }
    out
}

fn print_summary(report: &SentimentReport) {
    print!("{}", format_summary(report));
}

fn print_data_summary(report: &SentimentReport) {
    eprintln!("Data summary:");
    eprintln!("  Total ticker mentions: {}", report.total_mentions);
    eprintln!("  Bullish mentions:      {}", report.bullish_mentions);
    eprintln!("  Bearish mentions:      {}", report.bearish_mentions);
}

fn run_tickers(text: &str, config_path: Option<&PathBuf>) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let config = match build_analysis_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let candidates: Vec<&str> = extract_tickers(text).collect();
    let kept: Vec<&str> = valid_tickers(text, &config.exclusions).collect();
    println!("Candidates: {}", candidates.join(", "));
    println!("Tickers:    {}", kept.join(", "));

    let scorer = VaderScorer::new();
    match scorer.polarity(text) {
        Ok(polarity) => {
            let direction = sentiment::direction_for(text, polarity, &config.sentiment);
            println!("Polarity:   {polarity:.3}");
            println!(
                "Direction:  bullish={} bearish={}",
                direction.bullish, direction.bearish
            );
        }
        Err(e) => println!("Polarity:   unscored ({e})"),
    }
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(Some(config_path)) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let config = match build_analysis_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("Configuration {} is valid.", adapter.source());
    eprintln!("  max_comments:           {}", config.max_comments);
    eprintln!("  top_n:                  {}", config.top_n);
    eprintln!("  min_sentiment_mentions: {}", config.min_sentiment_mentions);
    eprintln!(
        "  thresholds:             bullish > {}, bearish < {}",
        config.sentiment.bullish_threshold, config.sentiment.bearish_threshold
    );
    eprintln!(
        "  keywords:               {} bullish, {} bearish",
        config.sentiment.bullish_keywords.len(),
        config.sentiment.bearish_keywords.len()
    );
    eprintln!("  excluded words:         {}", config.exclusions.len());
    ExitCode::SUCCESS
}

#[cfg(feature = "reddit")]
mod reddit {
    use std::io::{self, BufRead, IsTerminal, Write};

    use crate::adapters::reddit_adapter::RedditAdapter;
    use crate::domain::error::{RetrievalError, WsbError};
    use crate::domain::thread::{
        find_thread, parse_thread_ref, DEFAULT_SEARCH_LIMIT, DEFAULT_THREAD_KEYWORDS,
    };
    use crate::ports::config_port::ConfigPort;
    use crate::ports::thread_port::ThreadPort;

    pub fn fetch_thread(
        reference: &str,
        config: &dyn ConfigPort,
        limit: usize,
    ) -> Result<(String, Vec<String>), WsbError> {
        let id = parse_thread_ref(reference)?;
        let adapter = RedditAdapter::from_config(config)?;
        let thread = adapter.fetch_thread(&id, limit)?;
        Ok((thread.title, thread.bodies))
    }

    pub fn discover_and_fetch(
        subreddit: &str,
        config: &dyn ConfigPort,
        limit: usize,
    ) -> Result<(String, Vec<String>), WsbError> {
        let adapter = RedditAdapter::from_config(config)?;
        let keywords = config.get_list("reddit", "thread_keywords").unwrap_or_else(|| {
            DEFAULT_THREAD_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect()
        });
        let search_limit =
            config.get_int("reddit", "search_limit", DEFAULT_SEARCH_LIMIT as i64) as usize;

        tracing::info!("Searching for an earnings thread in r/{subreddit}");
        let threads = adapter.recent_threads(subreddit, search_limit)?;

        if let Some(found) = find_thread(&threads, &keywords) {
            tracing::info!("Found thread: {}", found.title);
            let thread = adapter.fetch_thread(&found.id, limit)?;
            return Ok((thread.title, thread.bodies));
        }

        tracing::warn!("no earnings thread found automatically");
        match prompt_manual_thread()? {
            Some((reference, title)) => {
                let (fetched_title, bodies) = fetch_thread(&reference, config, limit)?;
                Ok((title.unwrap_or(fetched_title), bodies))
            }
            None => Err(RetrievalError::ThreadNotFound {
                subreddit: subreddit.to_string(),
                keywords,
            }
            .into()),
        }
    }

    /// Ask for a thread URL/id and an optional title. `None` when stdin is not
    /// interactive or the answer is blank.
    fn prompt_manual_thread() -> Result<Option<(String, Option<String>)>, WsbError> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return Ok(None);
        }

        let ask = |question: &str| -> Result<String, WsbError> {
            eprint!("{question}");
            io::stderr().flush()?;
            let mut line = String::new();
            stdin.lock().read_line(&mut line)?;
            Ok(line.trim().to_string())
        };

        let reference = ask("Enter the thread URL or ID manually: ")?;
        if reference.is_empty() {
            return Ok(None);
        }
        let title = ask("Enter a title/description for this thread: ")?;
        Ok(Some((reference, Some(title).filter(|t| !t.is_empty()))))
    }
}
