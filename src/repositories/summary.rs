use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument};

use crate::entities::SummaryRecord;
use crate::repositories::{errors::StoreError, pool::LazyPool};

/// Append-only store for summaries and their Urdu translations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SummaryRepository: Send + Sync {
    async fn save(
        &self,
        url: &str,
        summary: &str,
        urdu_summary: &str,
    ) -> Result<SummaryRecord, StoreError>;

    async fn find(&self, id: i64) -> Result<Option<SummaryRecord>, StoreError>;

    /// Every summary saved for `url`, newest first.
    async fn list_by_url(&self, url: &str) -> Result<Vec<SummaryRecord>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgSummaryRepository {
    pool: LazyPool,
}

impl PgSummaryRepository {
    pub fn new(pool: LazyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SummaryRepository for PgSummaryRepository {
    #[instrument(skip(self, summary, urdu_summary))]
    async fn save(
        &self,
        url: &str,
        summary: &str,
        urdu_summary: &str,
    ) -> Result<SummaryRecord, StoreError> {
        if [url, summary, urdu_summary]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(StoreError::Validation(
                "URL, summary, and Urdu summary are required".to_string(),
            ));
        }

        let pool = self.pool.get().await?;
        let record = sqlx::query_as::<_, SummaryRecord>(
            r#"
            INSERT INTO summaries (url, summary_text, urdu_summary, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, url, summary_text, urdu_summary, created_at
            "#,
        )
        .bind(url)
        .bind(summary)
        .bind(urdu_summary)
        .bind(Utc::now())
        .fetch_one(&pool)
        .await
        .map_err(StoreError::from_sqlx)?;

        info!(id = record.id, "summary saved");
        Ok(record)
    }

    async fn find(&self, id: i64) -> Result<Option<SummaryRecord>, StoreError> {
        let pool = self.pool.get().await?;
        sqlx::query_as::<_, SummaryRecord>(
            r#"
            SELECT id, url, summary_text, urdu_summary, created_at
            FROM summaries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&pool)
        .await
        .map_err(StoreError::from_sqlx)
    }

    async fn list_by_url(&self, url: &str) -> Result<Vec<SummaryRecord>, StoreError> {
        let pool = self.pool.get().await?;
        sqlx::query_as::<_, SummaryRecord>(
            r#"
            SELECT id, url, summary_text, urdu_summary, created_at
            FROM summaries
            WHERE url = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(url)
        .fetch_all(&pool)
        .await
        .map_err(StoreError::from_sqlx)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let pool = self.pool.get().await?;
        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .map_err(StoreError::from_sqlx)?;
        Ok(())
    }
}
