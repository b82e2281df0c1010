//! Database migration commands.
//!
//! # Usage
//!
//! ```bash
//! pm-cli migrate ingest
//! ```
//!
//! # Environment Variables
//!
//! - `INGEST_DATABASE_URL` - `PostgreSQL` connection string for the document store
//!
//! Migration files live in `crates/ingest/migrations/`.

use sqlx::PgPool;

/// Errors that can occur while running migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run ingest document store migrations.
///
/// # Errors
///
/// Returns an error if `INGEST_DATABASE_URL` is unset, the database is
/// unreachable, or a migration fails.
pub async fn ingest() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("INGEST_DATABASE_URL")
        .map_err(|_| MigrationError::MissingEnvVar("INGEST_DATABASE_URL"))?;

    tracing::info!("Connecting to ingest database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Running ingest migrations...");
    sqlx::migrate!("../ingest/migrations").run(&pool).await?;

    tracing::info!("Ingest migrations complete!");
    Ok(())
}
