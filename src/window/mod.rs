mod config;
mod extractor;
mod types;

pub use config::{WindowConfig, DEFAULT_MAX_MATCHES, DEFAULT_POINT_PADDING_SECS};
pub use extractor::{
    extract_time_window, extract_time_window_with, scan_timestamp_tokens, RANGE_CONNECTORS,
};
pub use types::TimeWindow;

#[cfg(test)]
pub mod unit_test;
