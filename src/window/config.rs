use serde::{Deserialize, Serialize};

/// Seconds of lookback and lookahead around a single timestamp mention
pub const DEFAULT_POINT_PADDING_SECS: u64 = 20;

/// Timestamp mentions inspected per prompt
pub const DEFAULT_MAX_MATCHES: usize = 4;

/// Policy knobs for time-window extraction
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WindowConfig {
    pub point_padding_secs: u64,
    pub max_matches: usize,
    /// Reject minute/second components above 59 instead of accepting them
    pub strict_components: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            point_padding_secs: DEFAULT_POINT_PADDING_SECS,
            max_matches: DEFAULT_MAX_MATCHES,
            strict_components: false,
        }
    }
}
