use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ai::{dictionary, errors::AiError, gemini::TextGenerator};
use crate::config::TranslatorBackend;

pub const TRANSLATE_INSTRUCTION: &str = "Translate the following English text to Urdu:";

/// English → Urdu translation capability.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, AiError>;
}

fn require_text(text: &str) -> Result<(), AiError> {
    if text.trim().is_empty() {
        return Err(AiError::Validation(
            "Text to translate is required".to_string(),
        ));
    }
    Ok(())
}

pub fn translate_prompt(text: &str) -> String {
    format!("{}\n\n{}", TRANSLATE_INSTRUCTION, text)
}

#[derive(Clone)]
pub struct GenerativeTranslator {
    generator: Arc<dyn TextGenerator>,
}

impl GenerativeTranslator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl Translator for GenerativeTranslator {
    #[instrument(skip_all)]
    async fn translate(&self, text: &str) -> Result<String, AiError> {
        require_text(text)?;
        let translated = self.generator.generate(&translate_prompt(text)).await?;
        info!(chars = translated.chars().count(), "translated text to Urdu");
        Ok(translated)
    }
}

/// Offline phrase substitution. Text it has no entry for comes back as is.
#[derive(Debug, Clone, Default)]
pub struct DictionaryTranslator;

impl DictionaryTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for DictionaryTranslator {
    async fn translate(&self, text: &str) -> Result<String, AiError> {
        require_text(text)?;
        Ok(dictionary::substitute(text))
    }
}

/// Picks the translator variant the configuration asks for.
pub fn build_translator(
    backend: TranslatorBackend,
    generator: Arc<dyn TextGenerator>,
) -> Arc<dyn Translator> {
    match backend {
        TranslatorBackend::Generative => Arc::new(GenerativeTranslator::new(generator)),
        TranslatorBackend::Dictionary => Arc::new(DictionaryTranslator::new()),
    }
}
