use std::sync::Arc;

use crate::{
    ai::{Summarizer, Translator},
    extractor::ContentExtractor,
    pipeline::Pipeline,
    repositories::{FullTextRepository, SummaryRepository},
};

/// Shared handles for the request handlers. The single-step endpoints call
/// the collaborators directly; `/api/summarize` goes through the pipeline,
/// which holds the same instances.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn ContentExtractor>,
    pub summarizer: Arc<dyn Summarizer>,
    pub translator: Arc<dyn Translator>,
    pub full_text: Arc<dyn FullTextRepository>,
    pub summaries: Arc<dyn SummaryRepository>,
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(
        extractor: Arc<dyn ContentExtractor>,
        summarizer: Arc<dyn Summarizer>,
        translator: Arc<dyn Translator>,
        full_text: Arc<dyn FullTextRepository>,
        summaries: Arc<dyn SummaryRepository>,
        step_timeout: std::time::Duration,
    ) -> Self {
        let pipeline = Arc::new(Pipeline::new(
            extractor.clone(),
            summarizer.clone(),
            translator.clone(),
            full_text.clone(),
            summaries.clone(),
            step_timeout,
        ));

        Self {
            extractor,
            summarizer,
            translator,
            full_text,
            summaries,
            pipeline,
        }
    }
}
