//! Configuration validation.
//!
//! Checks raw config values before an analysis run starts.

use crate::domain::error::WsbError;
use crate::domain::sentiment::{DEFAULT_BEARISH_THRESHOLD, DEFAULT_BULLISH_THRESHOLD};
use crate::ports::config_port::ConfigPort;

pub fn validate_analysis_config(config: &dyn ConfigPort) -> Result<(), WsbError> {
    validate_positive(config, "analysis", "max_comments")?;
    validate_positive(config, "analysis", "top_n")?;
    validate_min_sentiment_mentions(config)?;
    validate_thresholds(config)?;
    validate_search_limit(config)?;
    Ok(())
}

fn validate_positive(config: &dyn ConfigPort, section: &str, key: &str) -> Result<(), WsbError> {
    let value = config.get_int(section, key, 1);
    if value <= 0 {
        return Err(WsbError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: format!("{key} must be positive"),
        });
    }
    Ok(())
}

fn validate_min_sentiment_mentions(config: &dyn ConfigPort) -> Result<(), WsbError> {
    let value = config.get_int("analysis", "min_sentiment_mentions", 0);
    if value < 0 {
        return Err(WsbError::ConfigInvalid {
            section: "analysis".to_string(),
            key: "min_sentiment_mentions".to_string(),
            reason: "min_sentiment_mentions must be non-negative".to_string(),
        });
    }
    Ok(())
}

fn validate_thresholds(config: &dyn ConfigPort) -> Result<(), WsbError> {
    let bullish = config.get_double("sentiment", "bullish_threshold", DEFAULT_BULLISH_THRESHOLD);
    let bearish = config.get_double("sentiment", "bearish_threshold", DEFAULT_BEARISH_THRESHOLD);

    for (key, value) in [("bullish_threshold", bullish), ("bearish_threshold", bearish)] {
        if !(-1.0..=1.0).contains(&value) {
            return Err(WsbError::ConfigInvalid {
                section: "sentiment".to_string(),
                key: key.to_string(),
                reason: format!("{key} must be between -1 and 1"),
            });
        }
    }

    if bearish > bullish {
        return Err(WsbError::ConfigInvalid {
            section: "sentiment".to_string(),
            key: "bearish_threshold".to_string(),
            reason: "bearish_threshold must not exceed bullish_threshold".to_string(),
        });
    }
    Ok(())
}

fn validate_search_limit(config: &dyn ConfigPort) -> Result<(), WsbError> {
    let value = config.get_int("reddit", "search_limit", 1);
    if !(1..=100).contains(&value) {
        return Err(WsbError::ConfigInvalid {
            section: "reddit".to_string(),
            key: "search_limit".to_string(),
            reason: "search_limit must be between 1 and 100".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn validate(ini: &str) -> Result<(), WsbError> {
        let adapter = FileConfigAdapter::from_string(ini).unwrap();
        validate_analysis_config(&adapter)
    }

    fn invalid_key(result: Result<(), WsbError>) -> String {
        match result {
            Err(WsbError::ConfigInvalid { key, .. }) => key,
            other => panic!("expected ConfigInvalid, got {other:?}"),
        }
    }

    #[test]
    fn empty_config_is_valid() {
        assert!(validate("").is_ok());
    }

    #[test]
    fn full_config_is_valid() {
        let ini = r#"
[analysis]
max_comments = 250
top_n = 5
min_sentiment_mentions = 3

[sentiment]
bullish_threshold = 0.2
bearish_threshold = -0.2

[reddit]
search_limit = 50
"#;
        assert!(validate(ini).is_ok());
    }

    #[test]
    fn rejects_zero_max_comments() {
        assert_eq!(
            invalid_key(validate("[analysis]\nmax_comments = 0\n")),
            "max_comments"
        );
    }

    #[test]
    fn rejects_negative_top_n() {
        assert_eq!(invalid_key(validate("[analysis]\ntop_n = -3\n")), "top_n");
    }

    #[test]
    fn rejects_negative_min_mentions() {
        assert_eq!(
            invalid_key(validate("[analysis]\nmin_sentiment_mentions = -1\n")),
            "min_sentiment_mentions"
        );
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        assert_eq!(
            invalid_key(validate("[sentiment]\nbullish_threshold = 1.5\n")),
            "bullish_threshold"
        );
    }

    #[test]
    fn rejects_crossed_thresholds() {
        let ini = "[sentiment]\nbullish_threshold = -0.3\nbearish_threshold = 0.3\n";
        assert_eq!(invalid_key(validate(ini)), "bearish_threshold");
    }

    #[test]
    fn rejects_search_limit_above_listing_cap() {
        assert_eq!(
            invalid_key(validate("[reddit]\nsearch_limit = 500\n")),
            "search_limit"
        );
    }
}
