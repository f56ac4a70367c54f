pub mod timestamps;
pub use timestamps::{format_hms, parse_timestamp, parse_timestamp_strict, TimestampToken};

pub mod window;
pub use window::{extract_time_window, extract_time_window_with, TimeWindow, WindowConfig};

pub mod transcript;
pub use transcript::{
    build_grounded_prompt, build_transcript_context, looks_transcript_related, ScopedQuestion,
    Transcript, TranscriptSegment,
};

pub mod sources;
pub use sources::{HttpTranscriptSource, LocalTranscriptSource, TranscriptSource};

pub mod errors;
pub use errors::{SourceError, TimeScopeError, TimeScopeResult, TranscriptError};

use log::info;

macro_rules! with_transcript_source {
    ($source:expr, $body:expr) => {
        if $source.starts_with("http://") || $source.starts_with("https://") {
            let source = HttpTranscriptSource::new($source)?;
            $body(source).await
        } else {
            let source = LocalTranscriptSource::open(&$source)?;
            $body(source).await
        }
    };
}

/// Load a transcript from a local path or an `http(s)://` URL.
///
/// The document may be a stored transcript (`{"segments": [...]}`) or a raw
/// Deepgram response.
pub async fn load_transcript(source: String) -> TimeScopeResult<Transcript> {
    with_transcript_source!(source, |source| { load_transcript_from(source) })
}

/// Load a transcript from any [`TranscriptSource`].
pub async fn load_transcript_from<S: TranscriptSource>(mut source: S) -> TimeScopeResult<Transcript> {
    info!("Loading transcript from {}", source.describe());
    let data = source.fetch().await?;
    source.print_stats();
    Transcript::from_json_slice(&data)
}
