use crate::errors::TimeScopeResult;
use async_trait::async_trait;
use log::info;
use std::path::{Path, PathBuf};

/// Where transcript JSON comes from: a local file or an HTTP endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptSource: Send {
    /// Read the whole document.
    async fn fetch(&mut self) -> TimeScopeResult<Vec<u8>>;

    /// Human-readable location for logs
    fn describe(&self) -> String;

    fn print_stats(&self) {}
}

/// Local file wrapper
pub struct LocalTranscriptSource {
    path: PathBuf,
    bytes_read: u64,
}

impl LocalTranscriptSource {
    /// Open a transcript file; fails if it does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> TimeScopeResult<Self> {
        let path = path.as_ref().to_path_buf();
        std::fs::metadata(&path)?;
        Ok(Self {
            path,
            bytes_read: 0,
        })
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

#[async_trait]
impl TranscriptSource for LocalTranscriptSource {
    async fn fetch(&mut self) -> TimeScopeResult<Vec<u8>> {
        let data = std::fs::read(&self.path)?;
        self.bytes_read += data.len() as u64;
        Ok(data)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn print_stats(&self) {
        info!("📄 Read {} bytes from {}", self.bytes_read, self.describe());
    }
}
