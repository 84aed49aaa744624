use axum::{
    Json,
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::{
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};
use tracing::{debug, warn};

use crate::{api::dtos::ErrorResponse, config::Config};

/// Expired windows are swept once every this many admitted requests.
const SWEEP_INTERVAL: u64 = 1024;

/// Fixed-window request counter keyed by client IP.
#[derive(Clone)]
pub struct RateLimit {
    store: Arc<DashMap<String, Window>>,
    calls: Arc<AtomicU64>,
    max_requests: u32,
    window_seconds: i64,
}

#[derive(Debug, Clone)]
struct Window {
    count: u32,
    started_at: DateTime<Utc>,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_seconds: i64) -> Self {
        Self {
            store: Arc::new(DashMap::new()),
            calls: Arc::new(AtomicU64::new(0)),
            max_requests,
            window_seconds,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.rate_limit_max_requests(),
            config.rate_limit_window_secs(),
        )
    }

    /// Counts one request from `client`; false once it is over the limit.
    fn admit(&self, client: String, now: DateTime<Utc>) -> bool {
        // Sweep before taking the entry: `retain` locks every shard.
        if self.calls.fetch_add(1, Ordering::Relaxed) % SWEEP_INTERVAL == SWEEP_INTERVAL - 1 {
            self.evict_expired(now);
        }

        let mut entry = self.store.entry(client).or_insert_with(|| Window {
            count: 0,
            started_at: now,
        });
        let window = entry.value_mut();

        if self.expired(window, now) {
            window.count = 0;
            window.started_at = now;
        }

        window.count = window.count.saturating_add(1);
        window.count <= self.max_requests
    }

    fn expired(&self, window: &Window, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(window.started_at) >= Duration::seconds(self.window_seconds)
    }

    /// Drops every client whose window has run out.
    fn evict_expired(&self, now: DateTime<Utc>) {
        let before = self.store.len();
        self.store.retain(|_, window| !self.expired(window, now));
        debug!(evicted = before.saturating_sub(self.store.len()), "swept rate limit windows");
    }
}

/// IP-based rate limiting middleware. Requests served without connection
/// info (for example in-process tests) share the "unknown" bucket.
pub async fn rate_limit_middleware(
    State(rate_limit): State<RateLimit>,
    req: Request,
    next: Next,
) -> Response {
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    if !rate_limit.admit(client.clone(), Utc::now()) {
        warn!(client = %client, path = %req.uri().path(), "rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse::new("Rate limit exceeded")),
        )
            .into_response();
    }

    next.run(req).await
}
