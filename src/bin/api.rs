use anyhow::{Context, Result};
use axum::http::{HeaderName, Request};
use blogsum::{
    ai::{GeminiClient, GenerativeSummarizer, TextGenerator, build_translator},
    api,
    app_state::AppState,
    config::Config,
    extractor::HttpContentExtractor,
    middleware::rate_limit::RateLimit,
    repositories::{LazyPool, PgFullTextRepository, PgSummaryRepository},
};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info_span;
use tracing_subscriber::EnvFilter;

const REQUEST_ID_HEADER: &str = "x-request-id";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,blogsum=debug,sqlx=warn"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;
    if config.gemini_api_key().is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; summarize and translate calls will fail");
    }

    // Pools connect on first use so the service starts without its stores.
    let full_text = Arc::new(PgFullTextRepository::new(LazyPool::new(
        "full_text",
        config.full_text_database_url(),
        config.database_max_connections(),
    )));
    let summaries = Arc::new(PgSummaryRepository::new(LazyPool::new(
        "summaries",
        config.summary_database_url(),
        config.database_max_connections(),
    )));

    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiClient::from_config(&config)?);
    let state = AppState::new(
        Arc::new(HttpContentExtractor::with_timeout(config.request_timeout())),
        Arc::new(GenerativeSummarizer::new(generator.clone())),
        build_translator(config.translator_backend(), generator),
        full_text,
        summaries,
        config.step_timeout(),
    );

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let app = api::router(state, RateLimit::from_config(&config)).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http().make_span_with(|req: &Request<_>| {
                    let request_id = req
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default();
                    info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri(),
                        request_id,
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::new(request_id)),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr()))?;
    tracing::info!("Listening on {}", config.bind_addr());
    tracing::info!("API docs: http://{}/docs", config.bind_addr());

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
