use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{sync::Arc, time::Duration};
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::repositories::errors::StoreError;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Process-wide connection pool that is opened on first use.
///
/// Concurrent first callers share a single connect attempt. A failed attempt
/// leaves the cell empty so the next call tries again; once open, the pool
/// itself replaces connections that drop.
#[derive(Clone)]
pub struct LazyPool {
    inner: Arc<Inner>,
}

struct Inner {
    name: &'static str,
    url: String,
    max_connections: u32,
    cell: OnceCell<PgPool>,
}

impl LazyPool {
    pub fn new(name: &'static str, url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            inner: Arc::new(Inner {
                name,
                url: url.into(),
                max_connections,
                cell: OnceCell::new(),
            }),
        }
    }

    /// Wraps a pool that is already open (tests, migrations).
    pub fn from_pool(name: &'static str, pool: PgPool) -> Self {
        Self {
            inner: Arc::new(Inner {
                name,
                url: String::new(),
                max_connections: pool.options().get_max_connections(),
                cell: OnceCell::new_with(Some(pool)),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    pub fn is_connected(&self) -> bool {
        self.inner.cell.initialized()
    }

    pub async fn get(&self) -> Result<PgPool, StoreError> {
        let inner = &self.inner;
        let pool = inner
            .cell
            .get_or_try_init(|| async {
                info!(store = inner.name, "connecting to store");
                PgPoolOptions::new()
                    .max_connections(inner.max_connections)
                    .acquire_timeout(ACQUIRE_TIMEOUT)
                    .connect(&inner.url)
                    .await
                    .map_err(|e| {
                        error!(store = inner.name, error = %e, "store connection failed");
                        StoreError::Connection(e.to_string())
                    })
            })
            .await?;
        Ok(pool.clone())
    }
}
