use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::entities::FullTextRecord;
use crate::repositories::{errors::StoreError, pool::LazyPool};

/// Append-only store for scraped article text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FullTextRepository: Send + Sync {
    async fn save(&self, url: &str, content: &str) -> Result<FullTextRecord, StoreError>;

    /// Every record saved for `url`, newest first.
    async fn list_by_url(&self, url: &str) -> Result<Vec<FullTextRecord>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgFullTextRepository {
    pool: LazyPool,
}

impl PgFullTextRepository {
    pub fn new(pool: LazyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FullTextRepository for PgFullTextRepository {
    #[instrument(skip(self, content), fields(content_chars = content.chars().count()))]
    async fn save(&self, url: &str, content: &str) -> Result<FullTextRecord, StoreError> {
        if url.trim().is_empty() || content.trim().is_empty() {
            return Err(StoreError::Validation(
                "URL and content are required".to_string(),
            ));
        }

        let pool = self.pool.get().await?;
        let record = sqlx::query_as::<_, FullTextRecord>(
            r#"
            INSERT INTO blog_contents (id, url, content, "timestamp")
            VALUES ($1, $2, $3, $4)
            RETURNING id, url, content, "timestamp"
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(url)
        .bind(content)
        .bind(Utc::now())
        .fetch_one(&pool)
        .await
        .map_err(StoreError::from_sqlx)?;

        info!(id = %record.id, "full text saved");
        Ok(record)
    }

    async fn list_by_url(&self, url: &str) -> Result<Vec<FullTextRecord>, StoreError> {
        let pool = self.pool.get().await?;
        sqlx::query_as::<_, FullTextRecord>(
            r#"
            SELECT id, url, content, "timestamp"
            FROM blog_contents
            WHERE url = $1
            ORDER BY "timestamp" DESC
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
