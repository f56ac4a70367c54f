use super::context::ContextConfig;
use super::deepgram::segments_from_deepgram_with;
use crate::errors::{TimeScopeResult, TranscriptError};
use crate::timestamps::format_hms;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One timestamped stretch of speech
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// `[HH:MM:SS - HH:MM:SS] text`
    pub fn to_line(&self) -> String {
        format!(
            "[{} - {}] {}",
            format_hms(self.start),
            format_hms(self.end),
            self.text
        )
    }
}

/// A stored speech-to-text result for one uploaded file
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub mimetype: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    /// Build a transcript from a raw Deepgram prerecorded response.
    pub fn from_deepgram(
        payload: &Value,
        filename: Option<String>,
        mimetype: Option<String>,
    ) -> Self {
        Self::from_deepgram_with(payload, filename, mimetype, &ContextConfig::default())
    }

    pub fn from_deepgram_with(
        payload: &Value,
        filename: Option<String>,
        mimetype: Option<String>,
        config: &ContextConfig,
    ) -> Self {
        let duration = payload
            .get("metadata")
            .and_then(|m| m.get("duration"))
            .and_then(Value::as_f64);

        Self {
            filename,
            mimetype,
            duration,
            segments: segments_from_deepgram_with(payload, config.word_bucket_secs),
        }
    }

    /// Decode either a stored transcript document or a raw Deepgram response.
    pub fn from_json_slice(bytes: &[u8]) -> TimeScopeResult<Self> {
        let value: Value = serde_json::from_slice(bytes)?;

        let transcript = if value.get("segments").is_some() {
            serde_json::from_value(value)?
        } else if value.get("results").is_some() {
            Self::from_deepgram(&value, None, None)
        } else {
            return Err(TranscriptError::new(
                "JSON is neither a transcript document nor a Deepgram response",
            )
            .into());
        };

        info!("Decoded transcript with {} segments", transcript.segments.len());
        Ok(transcript)
    }

    /// The full transcript as timestamped lines
    pub fn text(&self) -> String {
        super::context::render_transcript(&self.segments)
    }
}
