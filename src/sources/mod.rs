pub mod http_transcript_source;
pub mod transcript_source;

pub use http_transcript_source::HttpTranscriptSource;
pub use transcript_source::{LocalTranscriptSource, TranscriptSource};

#[cfg(test)]
pub use transcript_source::MockTranscriptSource;
