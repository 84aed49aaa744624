use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ai::{errors::AiError, gemini::TextGenerator};

pub const SUMMARIZE_INSTRUCTION: &str = "Summarize the following text:";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, AiError>;
}

/// Summaries from the generative backend.
#[derive(Clone)]
pub struct GenerativeSummarizer {
    generator: Arc<dyn TextGenerator>,
}

impl GenerativeSummarizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

pub fn summarize_prompt(text: &str) -> String {
    format!("{}\n\n{}", SUMMARIZE_INSTRUCTION, text)
}

#[async_trait]
impl Summarizer for GenerativeSummarizer {
    #[instrument(skip_all)]
    async fn summarize(&self, text: &str) -> Result<String, AiError> {
        if text.trim().is_empty() {
            return Err(AiError::Validation(
                "Text to summarize is required".to_string(),
            ));
        }

        let summary = self.generator.generate(&summarize_prompt(text)).await?;
        info!(chars = summary.chars().count(), "generated summary");
        Ok(summary)
    }
}
