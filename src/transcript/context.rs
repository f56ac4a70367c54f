use super::types::TranscriptSegment;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Upper bound on the rendered context handed to the model
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 120_000;

/// Longest stretch of words merged into one segment when Deepgram
/// returns neither utterances nor paragraphs
pub const DEFAULT_WORD_BUCKET_SECS: f64 = 8.0;

/// Limits for transcript context rendering
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ContextConfig {
    pub max_context_chars: usize,
    pub word_bucket_secs: f64,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
            word_bucket_secs: DEFAULT_WORD_BUCKET_SECS,
        }
    }
}

/// Render segments as newline-separated `[HH:MM:SS - HH:MM:SS] text` lines
pub fn render_transcript(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(TranscriptSegment::to_line)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Segments with text that overlap `[start, end]`.
///
/// A missing `start` means the beginning of the recording and a missing
/// `end` means its end. A segment whose own end is zero or missing is
/// treated as ending where it starts.
pub fn select_segments(
    segments: &[TranscriptSegment],
    start: Option<f64>,
    end: Option<f64>,
) -> Vec<TranscriptSegment> {
    let st = start.unwrap_or(0.0);
    let et = end.unwrap_or(f64::INFINITY);

    segments
        .iter()
        .filter(|s| !s.text.trim().is_empty())
        .filter_map(|s| {
            let seg_end = if s.end > 0.0 { s.end } else { s.start };
            (seg_end >= st && s.start <= et)
                .then(|| TranscriptSegment::new(s.start, seg_end, s.text.trim()))
        })
        .collect()
}

/// Render the slice of the transcript overlapping `[start, end]`.
///
/// Returns an empty string when nothing overlaps.
pub fn build_transcript_context(
    segments: &[TranscriptSegment],
    start: Option<f64>,
    end: Option<f64>,
) -> String {
    build_transcript_context_with(segments, start, end, &ContextConfig::default())
}

pub fn build_transcript_context_with(
    segments: &[TranscriptSegment],
    start: Option<f64>,
    end: Option<f64>,
    config: &ContextConfig,
) -> String {
    let chosen = select_segments(segments, start, end);
    info!(
        "Selected {} of {} transcript segments",
        chosen.len(),
        segments.len()
    );
    if chosen.is_empty() {
        return String::new();
    }

    let mut context = render_transcript(&chosen);
    if let Some((cut, _)) = context.char_indices().nth(config.max_context_chars) {
        debug!("Truncating transcript context at byte {}", cut);
        context.truncate(cut);
    }
    context
}
