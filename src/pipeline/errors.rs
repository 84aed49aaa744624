use std::fmt::{Display, Formatter};
use std::time::Duration;
use thiserror::Error;

use crate::ai::AiError;
use crate::extractor::ExtractError;
use crate::repositories::StoreError;

/// The ordered steps of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Extract,
    Summarize,
    Translate,
    SaveFullText,
    SaveSummary,
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::Extract => "extract",
            Step::Summarize => "summarize",
            Step::Translate => "translate",
            Step::SaveFullText => "save_full_text",
            Step::SaveSummary => "save_summary",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    FullText,
    Summary,
}

impl Display for Store {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Store::FullText => f.write_str("full text"),
            Store::Summary => f.write_str("summary"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0}")]
    Validation(String),

    #[error("extraction failed: {0}")]
    Extraction(ExtractError),

    #[error("summarization failed: {0}")]
    Summarization(AiError),

    #[error("translation failed: {0}")]
    Translation(AiError),

    #[error("saving {store} failed: {source}")]
    Persistence { store: Store, source: StoreError },

    #[error("step {step} timed out after {after:?}")]
    Timeout { step: Step, after: Duration },
}

impl PipelineError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The step that failed; `None` when the run never started.
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::Validation(_) => None,
            Self::Extraction(_) => Some(Step::Extract),
            Self::Summarization(_) => Some(Step::Summarize),
            Self::Translation(_) => Some(Step::Translate),
            Self::Persistence {
                store: Store::FullText,
                ..
            } => Some(Step::SaveFullText),
            Self::Persistence {
                store: Store::Summary,
                ..
            } => Some(Step::SaveSummary),
            Self::Timeout { step, .. } => Some(*step),
        }
    }

    /// Short human-readable message for the end user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Timeout { .. } => "Request timed out".to_string(),
            _ => match self.step() {
                Some(Step::Extract) => "Failed to scrape blog content",
                Some(Step::Summarize) => "Failed to generate AI summary",
                Some(Step::Translate) => "Failed to translate text",
                Some(Step::SaveFullText) => "Failed to save full text",
                _ => "Failed to save summary",
            }
            .to_string(),
        }
    }

    /// The collaborator's own message, kept for diagnostics.
    pub fn detail(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Extraction(e) => e.to_string(),
            Self::Summarization(e) | Self::Translation(e) => e.to_string(),
            Self::Persistence { source, .. } => source.to_string(),
            Self::Timeout { .. } => self.to_string(),
        }
    }
}
