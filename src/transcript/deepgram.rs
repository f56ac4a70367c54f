use super::context::DEFAULT_WORD_BUCKET_SECS;
use super::types::TranscriptSegment;
use log::{debug, warn};
use serde_json::Value;

/// Flatten a Deepgram prerecorded response into timestamped segments.
///
/// Utterances win when present, then the first alternative's paragraphs,
/// then its words grouped into short buckets.
pub fn segments_from_deepgram(payload: &Value) -> Vec<TranscriptSegment> {
    segments_from_deepgram_with(payload, DEFAULT_WORD_BUCKET_SECS)
}

/// Same as [`segments_from_deepgram`] with an explicit word bucket length.
pub fn segments_from_deepgram_with(payload: &Value, word_bucket_secs: f64) -> Vec<TranscriptSegment> {
    let Some(results) = payload.get("results") else {
        warn!("Deepgram payload has no results");
        return Vec::new();
    };

    let utterances = from_utterances(results);
    if !utterances.is_empty() {
        debug!("Using {} utterances", utterances.len());
        return utterances;
    }

    let Some(alternative) = results
        .get("channels")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("alternatives"))
        .and_then(|a| a.get(0))
    else {
        return Vec::new();
    };

    let paragraphs = from_paragraphs(alternative);
    if !paragraphs.is_empty() {
        debug!("Using {} paragraphs", paragraphs.len());
        return paragraphs;
    }

    from_words(alternative, word_bucket_secs)
}

fn number(value: &Value, key: &str) -> Option<f64> {
    value.get(key).and_then(Value::as_f64)
}

fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn from_utterances(results: &Value) -> Vec<TranscriptSegment> {
    let Some(utterances) = results.get("utterances").and_then(Value::as_array) else {
        return Vec::new();
    };

    utterances
        .iter()
        .filter_map(|u| {
            let text = text(u, "transcript");
            if text.is_empty() {
                return None;
            }
            Some(TranscriptSegment::new(
                number(u, "start").unwrap_or(0.0),
                number(u, "end").unwrap_or(0.0),
                text,
            ))
        })
        .collect()
}

fn from_paragraphs(alternative: &Value) -> Vec<TranscriptSegment> {
    let Some(paragraphs) = alternative
        .get("paragraphs")
        .and_then(|p| p.get("paragraphs"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    paragraphs
        .iter()
        .filter_map(|p| {
            let text = match p.get("sentences").and_then(Value::as_array) {
                Some(sentences) if !sentences.is_empty() => sentences
                    .iter()
                    .map(|s| text(s, "text"))
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim()
                    .to_string(),
                _ => text(p, "text"),
            };
            if text.is_empty() {
                return None;
            }
            Some(TranscriptSegment::new(
                number(p, "start").unwrap_or(0.0),
                number(p, "end").unwrap_or(0.0),
                text,
            ))
        })
        .collect()
}

/// Group words into segments spanning at most `max_bucket_secs`
fn from_words(alternative: &Value, max_bucket_secs: f64) -> Vec<TranscriptSegment> {
    let Some(words) = alternative.get("words").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    let mut bucket: Vec<String> = Vec::new();
    let mut bucket_start = 0.0;
    let mut bucket_end = 0.0;

    for w in words {
        let word = text(w, "word");
        if word.is_empty() {
            continue;
        }
        let word_start = number(w, "start").unwrap_or(0.0);
        let word_end = number(w, "end").unwrap_or(word_start);

        if bucket.is_empty() {
            bucket_start = word_start;
        } else if word_end - bucket_start > max_bucket_secs {
            segments.push(TranscriptSegment::new(
                bucket_start,
                bucket_end,
                bucket.join(" "),
            ));
            bucket.clear();
            bucket_start = word_start;
        }
        bucket.push(word);
        bucket_end = word_end;
    }

    if !bucket.is_empty() {
        segments.push(TranscriptSegment::new(
            bucket_start,
            bucket_end,
            bucket.join(" "),
        ));
    }

    segments
}
