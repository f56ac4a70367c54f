use serde::Serialize;

/// A timestamp mention found in free-form text
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TimestampToken {
    pub raw: String,
    pub seconds: u64,
    /// Byte offset of the token in the scanned text
    pub offset: usize,
}

impl TimestampToken {
    /// Byte offset just past the end of the token.
    pub fn end(&self) -> usize {
        self.offset + self.raw.len()
    }
}
