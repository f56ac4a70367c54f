use super::config::WindowConfig;
use super::types::TimeWindow;
use crate::timestamps::{parse_timestamp, parse_timestamp_strict, TimestampToken};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

/// Words and symbols that turn two timestamp mentions into a range
pub const RANGE_CONNECTORS: &[&str] = &["-", "to", "and", "until"];

lazy_static! {
    static ref TIMESTAMP_RE: Regex =
        Regex::new(r"\b[0-9]{1,2}:[0-9]{2}(?::[0-9]{2})?\b").expect("timestamp pattern is valid");
}

/// Extract the time window a prompt refers to, using the default policy.
///
/// Two mentions joined by a connector (`"01:20-02:10"`, `"1:20 and 2:10"`)
/// form a range. A lone mention becomes a padded window around that moment.
/// Returns `None` when the prompt mentions no usable timestamp.
pub fn extract_time_window(text: &str) -> Option<TimeWindow> {
    extract_time_window_with(text, &WindowConfig::default())
}

/// Extract a time window with an explicit policy.
pub fn extract_time_window_with(text: &str, config: &WindowConfig) -> Option<TimeWindow> {
    if text.trim().is_empty() {
        return None;
    }

    let parse = if config.strict_components {
        parse_timestamp_strict
    } else {
        parse_timestamp
    };
    let tokens = scan(text, config.max_matches, parse);

    let first = tokens.first()?;
    if let Some(second) = tokens.get(1) {
        let between = text[first.end()..second.offset].to_lowercase();
        if RANGE_CONNECTORS.iter().any(|c| between.contains(c)) {
            debug!(
                "range {} .. {} joined by {:?}",
                first.raw,
                second.raw,
                between.trim()
            );
            return Some(TimeWindow::new(first.seconds, second.seconds));
        }
    }

    debug!(
        "single point {} padded by {}s",
        first.raw, config.point_padding_secs
    );
    Some(TimeWindow::around(first.seconds, config.point_padding_secs))
}

/// Find up to `limit` timestamp mentions, left to right.
///
/// The limit applies to raw pattern matches; matches that do not parse are
/// dropped from the result but still count toward it.
pub fn scan_timestamp_tokens(text: &str, limit: usize) -> Vec<TimestampToken> {
    scan(text, limit, parse_timestamp)
}

fn scan(text: &str, limit: usize, parse: fn(&str) -> Option<u64>) -> Vec<TimestampToken> {
    TIMESTAMP_RE
        .find_iter(text)
        .take(limit)
        .filter_map(|m| match parse(m.as_str()) {
            Some(seconds) => Some(TimestampToken {
                raw: m.as_str().to_string(),
                seconds,
                offset: m.start(),
            }),
            None => {
                debug!("skipping unparseable timestamp {:?}", m.as_str());
                None
            }
        })
        .collect()
}
