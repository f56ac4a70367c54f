mod context;
mod deepgram;
mod prompt;
mod relevance;
mod types;

pub use context::{
    build_transcript_context, build_transcript_context_with, render_transcript, select_segments,
    ContextConfig, DEFAULT_MAX_CONTEXT_CHARS, DEFAULT_WORD_BUCKET_SECS,
};
pub use deepgram::{segments_from_deepgram, segments_from_deepgram_with};
pub use prompt::{build_grounded_prompt, ScopedQuestion, NOT_STATED_ANSWER};
pub use relevance::{looks_transcript_related, TRANSCRIPT_KEYWORDS};
pub use types::{Transcript, TranscriptSegment};
