pub mod dtos;
pub mod handlers;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    app_state::AppState,
    entities::{FullTextRecord, SummaryRecord},
    health,
    middleware::rate_limit::{RateLimit, rate_limit_middleware},
    pipeline::PipelineOutput,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "blogsum", description = "Blog summarization and Urdu translation API"),
    paths(
        handlers::scrape,
        handlers::summarize_text,
        handlers::translate_urdu,
        handlers::save_full_text,
        handlers::save_summary,
        handlers::summarize_blog,
        handlers::get_summary,
        health::health_check,
    ),
    components(schemas(
        dtos::UrlRequest,
        dtos::SummarizeTextRequest,
        dtos::TranslateRequest,
        dtos::SaveFullTextRequest,
        dtos::SaveSummaryRequest,
        dtos::ScrapeResponse,
        dtos::SummaryResponse,
        dtos::TranslateResponse,
        dtos::SavedFullTextResponse,
        dtos::SavedSummaryResponse,
        dtos::ErrorResponse,
        PipelineOutput,
        FullTextRecord,
        SummaryRecord,
        health::HealthResponse,
    )),
    tags(
        (name = "blog", description = "Scraping, summarization and translation"),
        (name = "storage", description = "Full-text and summary stores"),
        (name = "health", description = "Liveness of the stores"),
    )
)]
pub struct ApiDoc;

/// Every route of the service. The generative endpoints share one per-IP
/// rate limiter.
pub fn router(state: AppState, rate_limit: RateLimit) -> Router {
    let limited = Router::new()
        .route("/api/summarize", post(handlers::summarize_blog))
        .route("/api/summarize-ai", post(handlers::summarize_text))
        .route("/api/translate-urdu", post(handlers::translate_urdu))
        .route_layer(middleware::from_fn_with_state(
            rate_limit,
            rate_limit_middleware,
        ));

    Router::new()
        .route("/api/scrape", post(handlers::scrape))
        .route("/api/save-full-text", post(handlers::save_full_text))
        .route("/api/save-summary", post(handlers::save_summary))
        .route("/api/summaries/{id}", get(handlers::get_summary))
        .route("/healthz", get(health::health_check))
        .merge(limited)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
