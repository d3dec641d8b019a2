//! Embedded schema migrations, applied at startup.

use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::error::{DbError, DbResult};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// ## Summary
/// Applies all pending migrations against the given database.
///
/// Runs on a blocking thread because the migration harness uses a synchronous
/// connection.
///
/// ## Errors
/// Returns an error if connecting fails or any migration cannot be applied.
pub async fn run_pending_migrations(database_url: &str) -> DbResult<()> {
    let database_url = database_url.to_owned();

    tokio::task::spawn_blocking(move || {
        let mut conn = diesel::pg::PgConnection::establish(&database_url)
            .map_err(|e| DbError::MigrationError(format!("Failed to connect: {e}")))?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::MigrationError(e.to_string()))?;

        for version in &applied {
            tracing::info!(migration = %version, "Applied migration");
        }

        Ok(())
    })
    .await
    .map_err(|e| DbError::MigrationError(format!("Migration task panicked: {e}")))?
}
