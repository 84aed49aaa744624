use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{app_state::AppState, repositories::StoreError};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub full_text_store: String,
    pub summary_store: String,
}

fn describe(result: &Result<(), StoreError>) -> String {
    match result {
        Ok(()) => "healthy".to_string(),
        Err(_) => "unavailable".to_string(),
    }
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Both stores reachable", body = HealthResponse),
        (status = 503, description = "A store is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let (full_text, summaries) = tokio::join!(state.full_text.ping(), state.summaries.ping());

    if let Err(e) = &full_text {
        error!(error = %e, "full text store health check failed");
    }
    if let Err(e) = &summaries {
        error!(error = %e, "summary store health check failed");
    }

    let healthy = full_text.is_ok() && summaries.is_ok();
    let body = HealthResponse {
        status: if healthy { "OK" } else { "DEGRADED" }.to_string(),
        full_text_store: describe(&full_text),
        summary_store: describe(&summaries),
    };

    if healthy {
        info!("Health check passed");
        (StatusCode::OK, Json(body))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(body))
    }
}
