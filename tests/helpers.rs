#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use uuid::Uuid;

use blogsum::{
    ai::{GeminiClient, GenerativeSummarizer, TextGenerator, build_translator},
    api,
    app_state::AppState,
    config::TranslatorBackend,
    entities::{FullTextRecord, SummaryRecord},
    extractor::HttpContentExtractor,
    middleware::rate_limit::RateLimit,
    repositories::{FullTextRepository, StoreError, SummaryRepository},
};

/// Full-text store kept in memory; can be switched to fail every call.
#[derive(Default)]
pub struct InMemoryFullTextRepository {
    pub records: Mutex<Vec<FullTextRecord>>,
    pub unavailable: AtomicBool,
}

impl InMemoryFullTextRepository {
    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Connection("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl FullTextRepository for InMemoryFullTextRepository {
    async fn save(&self, url: &str, content: &str) -> Result<FullTextRecord, StoreError> {
        self.check()?;
        let record = FullTextRecord {
            id: Uuid::new_v4(),
            url: url.to_string(),
            content: content.to_string(),
            timestamp: Utc::now(),
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn list_by_url(&self, url: &str) -> Result<Vec<FullTextRecord>, StoreError> {
        self.check()?;
        let records = self.records.lock().unwrap();
        Ok(records.iter().rev().filter(|r| r.url == url).cloned().collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}

#[derive(Default)]
pub struct InMemorySummaryRepository {
    pub records: Mutex<Vec<SummaryRecord>>,
    pub unavailable: AtomicBool,
}

impl InMemorySummaryRepository {
    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Connection("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SummaryRepository for InMemorySummaryRepository {
    async fn save(
        &self,
        url: &str,
        summary: &str,
        urdu_summary: &str,
    ) -> Result<SummaryRecord, StoreError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let record = SummaryRecord {
            id: records.len() as i64 + 1,
            url: url.to_string(),
            summary_text: summary.to_string(),
            urdu_summary: urdu_summary.to_string(),
            created_at: Utc::now(),
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn find(&self, id: i64) -> Result<Option<SummaryRecord>, StoreError> {
        self.check()?;
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn list_by_url(&self, url: &str) -> Result<Vec<SummaryRecord>, StoreError> {
        self.check()?;
        let records = self.records.lock().unwrap();
        Ok(records.iter().rev().filter(|r| r.url == url).cloned().collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}

#[derive(Clone, Default)]
pub struct Stores {
    pub full_text: Arc<InMemoryFullTextRepository>,
    pub summaries: Arc<InMemorySummaryRepository>,
}

/// Router wired to the real extractor and a Gemini client pointed at
/// `gemini_base`, with both stores in memory.
pub fn test_app(gemini_base: &str, stores: &Stores) -> Router {
    test_app_with(gemini_base, stores, TranslatorBackend::Generative, 1000)
}

pub fn test_app_with(
    gemini_base: &str,
    stores: &Stores,
    backend: TranslatorBackend,
    rate_limit: u32,
) -> Router {
    let generator: Arc<dyn TextGenerator> = Arc::new(
        GeminiClient::new(
            Some("test-key".to_string()),
            gemini_base,
            "gemini-2.0-flash",
            Duration::from_secs(5),
        )
        .expect("Failed to build Gemini client"),
    );

    let state = AppState::new(
        Arc::new(HttpContentExtractor::new()),
        Arc::new(GenerativeSummarizer::new(generator.clone())),
        build_translator(backend, generator),
        stores.full_text.clone(),
        stores.summaries.clone(),
        Duration::from_secs(10),
    );

    api::router(state, RateLimit::new(rate_limit, 60))
}
