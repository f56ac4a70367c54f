use crate::window::scan_timestamp_tokens;

/// Words that mark a prompt as being about the attached recording
pub const TRANSCRIPT_KEYWORDS: &[&str] = &[
    "transcript",
    "recording",
    "audio",
    "video",
    "clip",
    "attached",
    "the file",
    "timestamp",
    "timecode",
    "minute",
    "minutes",
    "second",
    "seconds",
];

/// Heuristic: does this prompt refer to the transcript at all?
///
/// Any explicit bound counts. Otherwise a timestamp mention or one of
/// [`TRANSCRIPT_KEYWORDS`] is required.
pub fn looks_transcript_related(message: &str, start: Option<f64>, end: Option<f64>) -> bool {
    if start.is_some() || end.is_some() {
        return true;
    }

    let text = message.trim().to_lowercase();
    if text.is_empty() {
        return false;
    }

    if !scan_timestamp_tokens(&text, 1).is_empty() {
        return true;
    }

    TRANSCRIPT_KEYWORDS.iter().any(|k| text.contains(k))
}
