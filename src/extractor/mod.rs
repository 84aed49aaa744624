pub mod errors;
pub mod language;
pub mod model;
pub mod reader;

#[cfg(test)]
mod tests;

pub use errors::ExtractError;
pub use model::{ExtractedContent, normalize_whitespace};

use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, instrument};

use crate::fetcher::{self, types::PageResponse};

/// Turns a URL into cleaned article text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<ExtractedContent, ExtractError>;
}

/// Fetches the page over HTTP and reads the first content region.
#[derive(Debug, Clone)]
pub struct HttpContentExtractor {
    timeout: Duration,
}

impl HttpContentExtractor {
    pub fn new() -> Self {
        Self::with_timeout(fetcher::DEFAULT_TIMEOUT)
    }

    /// Bounds each page fetch by `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for HttpContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentExtractor for HttpContentExtractor {
    #[instrument(skip(self))]
    async fn extract(&self, url: &str) -> Result<ExtractedContent, ExtractError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ExtractError::Validation("URL is required".to_string()));
        }

        let response = fetcher::fetch_with_timeout(url, self.timeout).await?;
        let content = extract(&response);
        if content.text.is_empty() {
            return Err(ExtractError::Parse(
                "no readable text found on page".to_string(),
            ));
        }

        info!(
            final_url = %content.source_url,
            chars = content.text.chars().count(),
            language = content.language.as_deref().unwrap_or("unknown"),
            "extracted article text"
        );
        Ok(content)
    }
}

/// Extracts from an already fetched page.
pub fn extract(resp: &PageResponse) -> ExtractedContent {
    let text = reader::extract_text(&resp.body_utf8);
    let language = language::detect_language(&text);

    ExtractedContent {
        source_url: resp.url_final.clone(),
        text,
        language,
        fetched_at: resp.fetched_at,
    }
}
