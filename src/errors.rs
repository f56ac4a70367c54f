use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while scoping transcripts
#[derive(Debug)]
pub enum TimeScopeError {
    Transcript(TranscriptError),
    Source(SourceError),
    Json(serde_json::Error),
    Other(io::Error),
}

/// Transcript decoding and context building errors
#[derive(Debug)]
pub struct TranscriptError {
    pub message: String,
}

impl TranscriptError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Transcript source (file or HTTP) errors
#[derive(Debug)]
pub struct SourceError {
    pub message: String,
}

impl SourceError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TimeScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeScopeError::Other(err) => write!(f, "I/O error: {}", err),
            TimeScopeError::Transcript(err) => write!(f, "Transcript error: {}", err),
            TimeScopeError::Source(err) => write!(f, "Source error: {}", err),
            TimeScopeError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for TimeScopeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TimeScopeError::Json(err) => Some(err),
            TimeScopeError::Other(err) => Some(err),
            _ => None,
        }
    }
}
impl Error for TranscriptError {}
impl Error for SourceError {}

// Conversion implementations
impl From<io::Error> for TimeScopeError {
    fn from(err: io::Error) -> Self {
        TimeScopeError::Other(err)
    }
}

impl From<TranscriptError> for TimeScopeError {
    fn from(err: TranscriptError) -> Self {
        TimeScopeError::Transcript(err)
    }
}

impl From<SourceError> for TimeScopeError {
    fn from(err: SourceError) -> Self {
        TimeScopeError::Source(err)
    }
}

impl From<serde_json::Error> for TimeScopeError {
    fn from(err: serde_json::Error) -> Self {
        TimeScopeError::Json(err)
    }
}

impl From<reqwest::Error> for TimeScopeError {
    fn from(err: reqwest::Error) -> Self {
        TimeScopeError::Source(SourceError::new(err.to_string()))
    }
}

// Conversion to io::Error for callers that only speak io::Result
impl From<TimeScopeError> for io::Error {
    fn from(err: TimeScopeError) -> Self {
        io::Error::other(err)
    }
}

impl From<TranscriptError> for io::Error {
    fn from(err: TranscriptError) -> Self {
        io::Error::other(err)
    }
}

impl From<SourceError> for io::Error {
    fn from(err: SourceError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with TimeScopeError
pub type TimeScopeResult<T> = Result<T, TimeScopeError>;
