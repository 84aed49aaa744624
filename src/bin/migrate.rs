use anyhow::{Context, Result};
use blogsum::{
    config::Config,
    repositories::{full_text_migrator, summary_migrator},
};
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};

async fn connect(url: &str) -> Result<Pool<Postgres>> {
    PgPoolOptions::new()
        .max_connections(2)
        .connect(url)
        .await
        .context("Failed to connect to database")
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    // runs all pending migrations; no-op if up-to-date
    let pool = connect(config.full_text_database_url()).await?;
    full_text_migrator()
        .run(&pool)
        .await
        .context("Failed to migrate full text store")?;
    tracing::info!("full text store migrated");

    let pool = connect(config.summary_database_url()).await?;
    summary_migrator()
        .run(&pool)
        .await
        .context("Failed to migrate summary store")?;
    tracing::info!("summary store migrated");

    Ok(())
}
