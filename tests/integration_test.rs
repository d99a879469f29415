//! End-to-end tests of the analysis pipeline.
//!
//! Tests cover:
//! - Canonical comment scenarios through `analyze_comments`
//! - Counter invariants under arbitrary comment lists (proptest)
//! - Retrieval through a mock comment port, then clean-up and analysis
//! - Scoring failures degrading to neutral without losing counts
//! - Report building and writing through both report adapters

mod common;

use common::*;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;
use wsb_sentiment::adapters::csv_report_adapter::CsvReportAdapter;
use wsb_sentiment::adapters::file_comment_adapter::FileCommentAdapter;
use wsb_sentiment::adapters::html_report::HtmlReportAdapter;
use wsb_sentiment::adapters::vader_adapter::VaderScorer;
use wsb_sentiment::domain::aggregator::{analyze_comments, AnalysisResult};
use wsb_sentiment::domain::comment::prepare_comments;
use wsb_sentiment::domain::error::WsbError;
use wsb_sentiment::domain::report::{build_report, SentimentLabel};
use wsb_sentiment::ports::comment_port::CommentPort;
use wsb_sentiment::ports::report_port::ReportPort;

fn run(comments: &[&str]) -> AnalysisResult {
    analyze_comments(comments, &default_config(), &neutral())
}

mod scenarios {
    use super::*;

    #[test]
    fn bullish_keywords_mark_ticker_bullish() {
        let result = run(&["I'm buying AAPL calls, to the moon!"]);
        assert_eq!(result.mentions.get("AAPL"), 1);
        assert_eq!(result.bullish.get("AAPL"), 1);
        assert!(result.bearish.is_empty());
    }

    #[test]
    fn bearish_keywords_mark_ticker_bearish() {
        let result = run(&["AAPL puts, this is going to crash"]);
        assert_eq!(result.mentions.get("AAPL"), 1);
        assert_eq!(result.bearish.get("AAPL"), 1);
        assert!(result.bullish.is_empty());
    }

    #[test]
    fn repeated_mentions_in_one_comment_all_count() {
        let result = run(&["TSLA TSLA TSLA great news"]);
        assert_eq!(result.mentions.get("TSLA"), 3);
        assert_eq!(result.mentions.len(), 1);
    }

    #[test]
    fn excluded_tokens_produce_no_mentions() {
        let result = run(&["THE SPY QQQ are not tickers"]);
        assert!(result.mentions.is_empty());
        assert!(result.bullish.is_empty());
        assert!(result.bearish.is_empty());
    }

    #[test]
    fn no_comments_produce_empty_counters_and_report() {
        let result = run(&[]);
        assert!(result.is_empty());
        assert_eq!(result.comments_analyzed, 0);

        let report = build_report(&result, "Empty", 10, 2);
        assert!(report.top_mentions.is_empty());
        assert!(report.sentiment.is_empty());
    }

    #[test]
    fn mixed_comment_counts_both_directions() {
        let result = run(&["GME calls or puts? both lol"]);
        assert_eq!(result.bullish.get("GME"), 1);
        assert_eq!(result.bearish.get("GME"), 1);
    }

    #[test]
    fn polarity_alone_can_classify() {
        let comments = ["NVDA is wonderful", "INTC is awful"];
        let scorer = TableScorer::new(&[("NVDA is wonderful", 0.6), ("INTC is awful", -0.6)]);
        let result = analyze_comments(&comments, &default_config(), &scorer);
        assert_eq!(result.bullish.get("NVDA"), 1);
        assert_eq!(result.bearish.get("INTC"), 1);
        assert!(!result.bullish.contains("INTC"));
    }

    #[test]
    fn bare_exclamations_are_not_bearish() {
        let comments = ["GME!!!", "AAPL!!!???"];
        let result = analyze_comments(&comments, &default_config(), &VaderScorer::new());
        assert_eq!(result.mentions.get("GME"), 1);
        assert!(result.bearish.is_empty());
        assert!(result.bullish.is_empty());
    }

    #[test]
    fn vader_scores_canonical_comments() {
        let scorer = VaderScorer::new();
        let comments = [
            "I'm buying AAPL calls, to the moon!",
            "AAPL puts, this is going to crash",
        ];
        let result = analyze_comments(&comments, &default_config(), &scorer);
        assert_eq!(result.mentions.get("AAPL"), 2);
        assert!(result.bullish.get("AAPL") >= 1);
        assert!(result.bearish.get("AAPL") >= 1);
        assert_eq!(result.unscored_comments, 0);
    }
}

mod counter_invariants {
    use super::*;

    fn comment_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                "[A-Z]{2,5}",
                Just("calls".to_string()),
                Just("puts".to_string()),
                Just("THE".to_string()),
                "[a-z]{1,8}",
            ],
            0..12,
        )
        .prop_map(|words| words.join(" "))
    }

    proptest! {
        #[test]
        fn directional_counts_never_exceed_mentions(
            comments in prop::collection::vec(comment_strategy(), 0..30)
        ) {
            let result = analyze_comments(&comments, &default_config(), &neutral());
            for (ticker, total) in result.mentions.iter() {
                prop_assert!(result.bullish.get(ticker) <= total);
                prop_assert!(result.bearish.get(ticker) <= total);
            }
            for (ticker, _) in result.bullish.iter().chain(result.bearish.iter()) {
                prop_assert!(result.mentions.contains(ticker));
            }
        }

        #[test]
        fn counts_do_not_depend_on_comment_order(
            (comments, shuffled) in prop::collection::vec(comment_strategy(), 0..20)
                .prop_flat_map(|comments| (Just(comments.clone()), Just(comments).prop_shuffle()))
        ) {
            let original = analyze_comments(&comments, &default_config(), &neutral());
            let permuted = analyze_comments(&shuffled, &default_config(), &neutral());
            prop_assert_eq!(&original.mentions, &permuted.mentions);
            prop_assert_eq!(&original.bullish, &permuted.bullish);
            prop_assert_eq!(&original.bearish, &permuted.bearish);

            let mut reversed = comments.clone();
            reversed.reverse();
            let backward = analyze_comments(&reversed, &default_config(), &neutral());
            prop_assert_eq!(original.mentions, backward.mentions);
            prop_assert_eq!(original.bullish, backward.bullish);
            prop_assert_eq!(original.bearish, backward.bearish);
        }

        #[test]
        fn excluded_words_never_counted(
            comments in prop::collection::vec(comment_strategy(), 0..20)
        ) {
            let config = default_config();
            let result = analyze_comments(&comments, &config, &neutral());
            for (ticker, _) in result.mentions.iter() {
                prop_assert!(!config.exclusions.is_excluded(ticker));
            }
        }
    }
}

mod retrieval_pipeline {
    use super::*;

    #[test]
    fn mock_port_feeds_pipeline() {
        let port = MockCommentPort::new("Weekly Earnings Thread").with_comments(&[
            "NVDA calls printing",
            "[deleted]",
            "AMD puts",
            "[removed]",
            "NVDA to the moon",
        ]);

        let raw = port.fetch_comments(500).unwrap();
        let comments = prepare_comments(raw, 500);
        assert_eq!(comments.len(), 3);

        let result = analyze_comments(&comments, &default_config(), &neutral());
        let report = build_report(&result, &port.title(), 10, 1);

        assert_eq!(report.title, "Weekly Earnings Thread");
        assert_eq!(report.comments_analyzed, 3);
        assert_eq!(report.top_mentions[0].ticker, "NVDA");
        assert_eq!(report.top_mentions[0].mentions, 2);
        assert_eq!(report.sentiment[0].label, SentimentLabel::Bullish);
        assert_eq!(port.calls.get(), 1);
    }

    #[test]
    fn limit_applies_before_removed_filter() {
        let port = MockCommentPort::new("t").with_comments(&["[deleted]", "AMD calls", "NVDA calls"]);
        let comments = prepare_comments(port.fetch_comments(100).unwrap(), 2);
        assert_eq!(comments, vec!["AMD calls".to_string()]);
    }

    #[test]
    fn retrieval_error_maps_to_retrieval_exit() {
        let port = MockCommentPort::new("t").with_error("connection reset");
        let err = port.fetch_comments(10).unwrap_err();
        assert!(matches!(err, WsbError::Retrieval(_)));
        assert_eq!(
            format!("{:?}", std::process::ExitCode::from(&err)),
            format!("{:?}", std::process::ExitCode::from(3))
        );
    }

    #[test]
    fn scoring_failure_keeps_mentions_but_not_direction() {
        let comments = ["AMD is fine", "GME BROKEN text"];
        let scorer = FlakyScorer {
            marker: "BROKEN".into(),
        };
        let result = analyze_comments(&comments, &default_config(), &scorer);
        assert_eq!(result.mentions.get("GME"), 1);
        assert!(!result.bullish.contains("GME"));
        assert!(!result.bearish.contains("GME"));
        assert_eq!(result.unscored_comments, 1);
        assert_eq!(result.comments_analyzed, 2);
    }

    #[test]
    fn file_source_end_to_end() {
        let file = write_temp_file(
            ".csv",
            "id,body\n1,TSLA calls all day\n2,[deleted]\n3,\"TSLA puts, AMD calls\"\n",
        );
        let adapter = FileCommentAdapter::new(file.path().to_path_buf());
        let comments = prepare_comments(adapter.fetch_comments(100).unwrap(), 100);
        let result = analyze_comments(&comments, &default_config(), &neutral());

        assert_eq!(result.mentions.get("TSLA"), 2);
        assert_eq!(result.bullish.get("TSLA"), 2);
        assert_eq!(result.bearish.get("TSLA"), 1);
        assert_eq!(result.mentions.get("AMD"), 1);
    }
}

mod report_output {
    use super::*;

    fn sample_result() -> AnalysisResult {
        run(&[
            "NVDA calls",
            "NVDA calls again",
            "NVDA puts maybe",
            "AMD puts",
            "AMD puts",
            "INTC bagholder here",
        ])
    }

    #[test]
    fn html_report_contains_both_sections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.html");
        let report = build_report(&sample_result(), "Weekly <Earnings>", 10, 2);
        HtmlReportAdapter::new().write(&report, &path).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("Weekly &lt;Earnings&gt;"));
        assert!(html.contains("NVDA"));
        assert!(html.contains("Bullish"));
        assert!(html.contains("Bearish"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn csv_report_lists_top_mentions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        let report = build_report(&sample_result(), "t", 2, 2);
        CsvReportAdapter::new().write(&report, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ticker,mentions,bullish,bearish,label",
                "NVDA,3,2,1,Bullish",
                "AMD,2,0,2,Bearish",
            ]
        );
    }

    #[test]
    fn sentiment_summary_respects_minimum() {
        let report = build_report(&sample_result(), "t", 10, 2);
        let tickers: Vec<&str> = report.sentiment.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["NVDA", "AMD"]);
    }
}
