use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header::ACCEPT_LANGUAGE},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::{
    ai::dictionary,
    api::dtos::{
        ErrorResponse, SaveFullTextRequest, SaveSummaryRequest, SavedFullTextResponse,
        SavedSummaryResponse, ScrapeResponse, SummarizeTextRequest, SummaryResponse,
        TranslateRequest, TranslateResponse, UrlRequest, non_blank,
    },
    app_state::AppState,
    entities::SummaryRecord,
    extractor::ExtractError,
    pipeline::PipelineOutput,
};

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}

/// Malformed or non-JSON bodies get the endpoint's own 400 message, with
/// the parser's complaint in `error`.
fn rejected(message: &str, rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::with_error(message, rejection.body_text())),
    )
        .into_response()
}

fn server_error(message: &str, detail: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::with_error(message, detail)),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/api/scrape",
    tag = "blog",
    request_body = UrlRequest,
    responses(
        (status = 200, description = "Readable text of the page", body = ScrapeResponse),
        (status = 400, description = "URL missing", body = ErrorResponse),
        (status = 500, description = "Fetching or parsing failed", body = ErrorResponse)
    )
)]
pub async fn scrape(
    State(state): State<AppState>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return rejected("URL is required", rejection),
    };

    let Some(url) = non_blank(&payload.url) else {
        return bad_request("URL is required");
    };

    match state.extractor.extract(url).await {
        Ok(content) => Json(ScrapeResponse {
            original_content: content.text,
        })
        .into_response(),
        Err(ExtractError::Validation(message)) => bad_request(&message),
        Err(e) => {
            error!(url, error = %e, "scrape failed");
            server_error("Failed to scrape blog content", e.to_string())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/summarize-ai",
    tag = "blog",
    request_body = SummarizeTextRequest,
    responses(
        (status = 200, description = "Summary of the text", body = SummaryResponse),
        (status = 400, description = "Text missing", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 500, description = "Generative backend failed", body = ErrorResponse)
    )
)]
pub async fn summarize_text(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeTextRequest>, JsonRejection>,
) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return rejected("Text to summarize is required", rejection),
    };

    let Some(text) = non_blank(&payload.text_to_summarize) else {
        return bad_request("Text to summarize is required");
    };

    match state.summarizer.summarize(text).await {
        Ok(summary) => Json(SummaryResponse { summary }).into_response(),
        Err(e) if e.is_validation() => bad_request(&e.to_string()),
        Err(e) => {
            error!(error = %e, "summarization failed");
            server_error("Failed to generate AI summary", e.to_string())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/translate-urdu",
    tag = "blog",
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "Urdu translation", body = TranslateResponse),
        (status = 400, description = "Text missing", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 500, description = "Translation failed", body = ErrorResponse)
    )
)]
pub async fn translate_urdu(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return rejected("Text to translate is required", rejection),
    };

    let Some(text) = non_blank(&payload.text_to_translate) else {
        return bad_request("Text to translate is required");
    };

    match state.translator.translate(text).await {
        Ok(translated_text) => Json(TranslateResponse { translated_text }).into_response(),
        Err(e) if e.is_validation() => bad_request(&e.to_string()),
        Err(e) => {
            error!(error = %e, "translation failed");
            server_error("Failed to translate text", e.to_string())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/save-full-text",
    tag = "storage",
    request_body = SaveFullTextRequest,
    responses(
        (status = 201, description = "Full text stored", body = SavedFullTextResponse),
        (status = 400, description = "URL or content missing", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
pub async fn save_full_text(
    State(state): State<AppState>,
    payload: Result<Json<SaveFullTextRequest>, JsonRejection>,
) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => return rejected("URL and content are required", rejection),
    };

    let (Some(url), Some(content)) = (non_blank(&payload.url), non_blank(&payload.content)) else {
        return bad_request("URL and content are required");
    };

    match state.full_text.save(url, content).await {
        Ok(data) => (
            StatusCode::CREATED,
            Json(SavedFullTextResponse {
                message: "Full text saved successfully".to_string(),
                data,
            }),
        )
            .into_response(),
        Err(e) if e.is_validation() => bad_request(&e.to_string()),
        Err(e) => {
            error!(url, error = %e, "saving full text failed");
            server_error("Failed to save full text", e.to_string())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/save-summary",
    tag = "storage",
    request_body = SaveSummaryRequest,
    responses(
        (status = 201, description = "Summary stored", body = SavedSummaryResponse),
        (status = 400, description = "A field is missing", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
pub async fn save_summary(
    State(state): State<AppState>,
    payload: Result<Json<SaveSummaryRequest>, JsonRejection>,
) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            return rejected("URL, summary, and Urdu summary are required", rejection);
        }
    };

    let (Some(url), Some(summary), Some(urdu_summary)) = (
        non_blank(&payload.url),
        non_blank(&payload.summary),
        non_blank(&payload.urdu_summary),
    ) else {
        return bad_request("URL, summary, and Urdu summary are required");
    };

    match state.summaries.save(url, summary, urdu_summary).await {
        Ok(data) => (
            StatusCode::CREATED,
            Json(SavedSummaryResponse {
                message: "Summary saved successfully".to_string(),
                data,
            }),
        )
            .into_response(),
        Err(e) if e.is_validation() => bad_request(&e.to_string()),
        Err(e) => {
            error!(url, error = %e, "saving summary failed");
            server_error("Failed to save summary", e.to_string())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/summarize",
    tag = "blog",
    request_body = UrlRequest,
    params(
        ("Accept-Language" = Option<String>, Header, description = "`ur` localizes error messages")
    ),
    responses(
        (status = 200, description = "Article text, summary and Urdu summary", body = PipelineOutput),
        (status = 400, description = "URL missing", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 500, description = "A step failed", body = ErrorResponse)
    )
)]
pub async fn summarize_blog(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Response {
    let localize = |message: String| {
        if prefers_urdu(&headers) {
            dictionary::substitute(&message)
        } else {
            message
        }
    };

    let url = match payload {
        Ok(Json(payload)) => payload.url.unwrap_or_default(),
        Err(rejection) => {
            let message = localize("URL is required".to_string());
            return rejected(&message, rejection);
        }
    };

    match state.pipeline.run(&url).await {
        Ok(output) => Json(output).into_response(),
        Err(e) => {
            let status = if e.is_validation() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };

            let message = localize(e.user_message());

            let body = if e.is_validation() {
                ErrorResponse::new(message)
            } else {
                ErrorResponse::with_error(message, e.detail())
            };
            (status, Json(body)).into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/summaries/{id}",
    tag = "storage",
    params(("id" = i64, Path, description = "Summary id")),
    responses(
        (status = 200, description = "Stored summary", body = SummaryRecord),
        (status = 404, description = "No summary with that id", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
pub async fn get_summary(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.summaries.find(id).await {
        Ok(Some(record)) => Json(record).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Summary not found")),
        )
            .into_response(),
        Err(e) => {
            warn!(id, error = %e, "loading summary failed");
            server_error("Failed to load summary", e.to_string())
        }
    }
}

/// Whether the highest-weighted `Accept-Language` entry is Urdu.
fn prefers_urdu(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mut best: Option<(&str, f32)> = None;
    for entry in value.split(',') {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or_default().trim();
        if tag.is_empty() {
            continue;
        }
        let weight = parts
            .find_map(|p| p.trim().strip_prefix("q="))
            .and_then(|q| q.parse::<f32>().ok())
            .unwrap_or(1.0);
        // q=0 means "not acceptable"
        if weight <= 0.0 {
            continue;
        }

        if best.is_none_or(|(_, w)| weight > w) {
            best = Some((tag, weight));
        }
    }

    best.is_some_and(|(tag, _)| {
        let primary = tag.split('-').next().unwrap_or_default();
        primary.eq_ignore_ascii_case("ur")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_prefers_urdu() {
        assert!(prefers_urdu(&accept("ur")));
        assert!(prefers_urdu(&accept("ur-PK,en;q=0.8")));
        assert!(prefers_urdu(&accept("en;q=0.5, ur;q=0.9")));
        assert!(!prefers_urdu(&accept("en-US,ur;q=0.8")));
        assert!(!prefers_urdu(&accept("urd")));
        assert!(!prefers_urdu(&HeaderMap::new()));
    }

    #[test]
    fn test_zero_weight_language_is_not_preferred() {
        assert!(!prefers_urdu(&accept("ur;q=0")));
        assert!(!prefers_urdu(&accept("ur;q=0.0, en;q=0")));
        assert!(prefers_urdu(&accept("en;q=0, ur;q=0.1")));
    }
}
