//! The summarization run: extract → summarize → translate → save full text →
//! save summary.
//!
//! Steps run strictly one after another and the first failure ends the run.
//! Nothing is retried and nothing already written is undone, so a failure in
//! the summary store leaves an orphaned full-text record behind. Callers that
//! want another attempt resubmit the URL and every step runs again.

pub mod errors;

pub use errors::{PipelineError, Step, Store};

use serde::{Deserialize, Serialize};
use std::{future::Future, sync::Arc, time::Duration};
use tracing::{Instrument, info, info_span, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::ai::{Summarizer, Translator};
use crate::extractor::ContentExtractor;
use crate::repositories::{FullTextRepository, SummaryRepository};

/// What a successful run hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PipelineOutput {
    pub original_text: String,
    pub summary: String,
    pub urdu_summary: String,
}

#[derive(Clone)]
pub struct Pipeline {
    extractor: Arc<dyn ContentExtractor>,
    summarizer: Arc<dyn Summarizer>,
    translator: Arc<dyn Translator>,
    full_text: Arc<dyn FullTextRepository>,
    summaries: Arc<dyn SummaryRepository>,
    step_timeout: Duration,
}

impl Pipeline {
    pub fn new(
        extractor: Arc<dyn ContentExtractor>,
        summarizer: Arc<dyn Summarizer>,
        translator: Arc<dyn Translator>,
        full_text: Arc<dyn FullTextRepository>,
        summaries: Arc<dyn SummaryRepository>,
        step_timeout: Duration,
    ) -> Self {
        Self {
            extractor,
            summarizer,
            translator,
            full_text,
            summaries,
            step_timeout,
        }
    }

    pub async fn run(&self, url: &str) -> Result<PipelineOutput, PipelineError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(PipelineError::Validation("URL is required".to_string()));
        }

        let span = info_span!("pipeline_run", run_id = %Uuid::new_v4(), url = %url);
        async {
            let result = self.run_steps(url).await;
            match &result {
                Ok(_) => info!("run completed"),
                Err(e) => warn!(
                    step = %e.step().map(|s| s.to_string()).unwrap_or_default(),
                    error = %e,
                    "run abandoned"
                ),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn run_steps(&self, url: &str) -> Result<PipelineOutput, PipelineError> {
        let content = self
            .bounded(Step::Extract, self.extractor.extract(url))
            .await?
            .map_err(PipelineError::Extraction)?;

        if let Some(language) = content.language.as_deref().filter(|l| *l != "en") {
            warn!(language, "source text does not look like English");
        }

        let summary = self
            .bounded(Step::Summarize, self.summarizer.summarize(&content.text))
            .await?
            .map_err(PipelineError::Summarization)?;

        let urdu_summary = self
            .bounded(Step::Translate, self.translator.translate(&summary))
            .await?
            .map_err(PipelineError::Translation)?;

        self.bounded(Step::SaveFullText, self.full_text.save(url, &content.text))
            .await?
            .map_err(|source| PipelineError::Persistence {
                store: Store::FullText,
                source,
            })?;

        self.bounded(
            Step::SaveSummary,
            self.summaries.save(url, &summary, &urdu_summary),
        )
        .await?
        .map_err(|source| PipelineError::Persistence {
            store: Store::Summary,
            source,
        })?;

        Ok(PipelineOutput {
            original_text: content.text,
            summary,
            urdu_summary,
        })
    }

    /// Runs one step under the per-step deadline.
    async fn bounded<T, E>(
        &self,
        step: Step,
        fut: impl Future<Output = Result<T, E>>,
    ) -> Result<Result<T, E>, PipelineError> {
        tokio::time::timeout(self.step_timeout, fut)
            .await
            .map_err(|_| PipelineError::Timeout {
                step,
                after: self.step_timeout,
            })
    }
}
