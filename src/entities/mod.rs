use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Full-text store ---

/// One scraped article. Append-only: resubmitting a URL adds another row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct FullTextRecord {
    pub id: Uuid,
    pub url: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

// --- Summary store ---

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct SummaryRecord {
    pub id: i64,
    pub url: String,
    pub summary_text: String,
    pub urdu_summary: String,
    pub created_at: DateTime<Utc>,
}
