use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{FullTextRecord, SummaryRecord};

// Request fields are optional on the wire so a missing field is reported
// with the endpoint's own 400 message instead of a deserialization error.

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UrlRequest {
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SummarizeTextRequest {
    pub text_to_summarize: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text_to_translate: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SaveFullTextRequest {
    pub url: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveSummaryRequest {
    pub url: Option<String>,
    pub summary: Option<String>,
    pub urdu_summary: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResponse {
    pub original_content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SavedFullTextResponse {
    pub message: String,
    pub data: FullTextRecord,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SavedSummaryResponse {
    pub message: String,
    pub data: SummaryRecord,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

/// Treats a missing field and a blank one the same way.
pub fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}
