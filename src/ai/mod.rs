pub mod dictionary;
pub mod errors;
pub mod gemini;
pub mod summarizer;
pub mod translator;

pub use errors::AiError;
pub use gemini::{GeminiClient, TextGenerator};
pub use summarizer::{GenerativeSummarizer, Summarizer};
pub use translator::{DictionaryTranslator, GenerativeTranslator, Translator, build_translator};
