pub mod errors;
pub mod full_text;
pub mod pool;
pub mod summary;

pub use errors::StoreError;
pub use full_text::{FullTextRepository, PgFullTextRepository};
pub use pool::LazyPool;
pub use summary::{PgSummaryRepository, SummaryRepository};

use sqlx::migrate::Migrator;

// Both stores may share one database in development, so each migrator
// tolerates versions applied by the other.

/// Schema of the full-text (document) store.
pub fn full_text_migrator() -> Migrator {
    let mut migrator = sqlx::migrate!("./migrations/full_text");
    migrator.set_ignore_missing(true);
    migrator
}

/// Schema of the summary store.
pub fn summary_migrator() -> Migrator {
    let mut migrator = sqlx::migrate!("./migrations/summaries");
    migrator.set_ignore_missing(true);
    migrator
}
