//! Client for the Gemini `generateContent` endpoint.
//!
//! Only the slice of the wire format the service needs is modelled: a single
//! user turn goes out, the first text part of the first candidate comes back.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::ai::errors::AiError;
use crate::config::Config;

const API_KEY_HEADER: &str = "x-goog-api-key";
const MISSING_KEY_MESSAGE: &str = "Gemini API key is not configured.";

/// Anything that can turn a prompt into a single completion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<String>,
        api_base: &str,
        model: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                api_base.trim_end_matches('/'),
                model
            ),
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            config.gemini_api_key().map(str::to_string),
            config.gemini_api_base(),
            config.gemini_model(),
            config.request_timeout(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip_all, fields(prompt_chars = prompt.chars().count()))]
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AiError::Configuration(MISSING_KEY_MESSAGE.to_string()))?;

        let payload = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!(endpoint = %self.endpoint, "calling generative backend");
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, api_key)
            .json(&payload)
            .send()
            .await
            .map_err(AiError::from_reqwest_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(AiError::from_reqwest_error)?;

        if !status.is_success() {
            let message = upstream_message(&body)
                .unwrap_or_else(|| format!("generative backend returned status {}", status));
            warn!(status = status.as_u16(), %message, "generative backend rejected request");
            return Err(AiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        parse_completion(&body)
    }
}

/// Prefers the structured `error.message`, then any non-empty raw body.
fn upstream_message(body: &str) -> Option<String> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(message) = envelope.error.and_then(|e| e.message)
    {
        return Some(message);
    }
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_completion(body: &str) -> Result<String, AiError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
        AiError::MalformedResponse(format!("response body is not valid JSON: {}", e))
    })?;

    parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| {
            AiError::MalformedResponse(
                "Gemini API returned an unexpected response structure".to_string(),
            )
        })
}
