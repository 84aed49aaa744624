use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub source_url: Url,
    pub text: String,
    /// ISO 639-1 code when the text is long enough to tell.
    pub language: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

/// Collapses every run of two or more whitespace characters into a single
/// space, then trims both ends. A lone newline or tab is left as is.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
