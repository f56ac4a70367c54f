use super::context::{build_transcript_context_with, ContextConfig};
use super::relevance::looks_transcript_related;
use super::types::TranscriptSegment;
use crate::errors::TranscriptError;
use crate::window::{extract_time_window, TimeWindow};
use serde::{Deserialize, Serialize};

/// Exact reply the model is told to give when the transcript lacks the answer
pub const NOT_STATED_ANSWER: &str = "Not stated in the recording.";

/// Outgoing chat request scoped to a transcript slice
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScopedQuestion {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
}

impl ScopedQuestion {
    /// Build the request for a chat message.
    ///
    /// Times are only attached when a transcript is active and the message
    /// mentions a usable timestamp.
    pub fn from_prompt(message: impl Into<String>, transcript_id: Option<String>) -> Self {
        let message = message.into();
        let window = transcript_id
            .as_ref()
            .and_then(|_| extract_time_window(&message));

        Self {
            message,
            transcript_id,
            start_time: window.map(|w| w.start as f64),
            end_time: window.map(|w| w.end as f64),
        }
    }

    pub fn window(&self) -> Option<TimeWindow> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(TimeWindow::new(
                start.max(0.0) as u64,
                end.max(0.0) as u64,
            )),
            _ => None,
        }
    }

    /// Whether the receiving side should ground the answer in the transcript
    pub fn uses_transcript(&self) -> bool {
        self.transcript_id.is_some()
            && looks_transcript_related(&self.message, self.start_time, self.end_time)
    }
}

/// Build a prompt that confines the answer to the transcript slice.
pub fn build_grounded_prompt(
    question: &str,
    segments: &[TranscriptSegment],
    window: Option<TimeWindow>,
) -> Result<String, TranscriptError> {
    let context = build_transcript_context_with(
        segments,
        window.map(|w| w.start as f64),
        window.map(|w| w.end as f64),
        &ContextConfig::default(),
    );
    if context.is_empty() {
        return Err(TranscriptError::new(
            "No transcript content in the requested time range",
        ));
    }

    let window_note = window
        .map(|w| format!(" Time window: {:.1}s to {:.1}s.", w.start as f64, w.end as f64))
        .unwrap_or_default();

    Ok(format!(
        "You are given a transcript from an audio/video recording with timestamps.{window_note} \
         Answer the user's question using ONLY the transcript content below. \
         Do not mention any limitations about accessing media files; you already have the transcript. \
         If the answer is not present in the transcript, say exactly: {NOT_STATED_ANSWER} \
         When you make a factual claim, include at least one supporting timestamp range in brackets.\n\n\
         Question: {question}\n\n\
         Transcript:\n\
         {context}\n\n\
         Answer (with timestamps):",
        question = question.trim(),
    ))
}
