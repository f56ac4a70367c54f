use super::TranscriptSource;
use crate::errors::{SourceError, TimeScopeError, TimeScopeResult};
use async_trait::async_trait;
use log::info;
use reqwest::{header::ACCEPT, Client};

pub struct HttpTranscriptSource {
    url: String,
    client: Client,
    http_request_count: u64,
    http_request_bytes_read: u64,
}

#[async_trait]
impl TranscriptSource for HttpTranscriptSource {
    async fn fetch(&mut self) -> TimeScopeResult<Vec<u8>> {
        self.fetch().await
    }

    fn describe(&self) -> String {
        self.url.clone()
    }

    fn print_stats(&self) {
        self.print_stats()
    }
}

impl HttpTranscriptSource {
    pub fn new(url: String) -> TimeScopeResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| SourceError::new(e.to_string()))?;

        Ok(Self {
            url,
            client,
            http_request_count: 0,
            http_request_bytes_read: 0,
        })
    }

    /// Http request count function.
    pub fn http_request_count(&self) -> u64 {
        self.http_request_count
    }

    /// Http request bytes read function.
    pub fn http_request_bytes_read(&self) -> u64 {
        self.http_request_bytes_read
    }

    /// Print stats function.
    pub fn print_stats(&self) {
        info!("📊 Download Statistics:");
        info!("   🔢 HTTP Requests: {}", self.http_request_count);
        info!(
            "   📥 Total Downloaded: {} bytes ({:.2} KB)",
            self.http_request_bytes_read,
            self.http_request_bytes_read as f64 / 1024.0
        );
    }

    pub async fn fetch(&mut self) -> TimeScopeResult<Vec<u8>> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        self.http_request_count += 1;

        if !response.status().is_success() {
            return Err(TimeScopeError::Source(SourceError::new(format!(
                "HTTP error: {}",
                response.status()
            ))));
        }

        let bytes = response.bytes().await?;
        self.http_request_bytes_read += bytes.len() as u64;

        Ok(bytes.to_vec())
    }
}
