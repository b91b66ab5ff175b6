//! Database initialization and migration runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to open the shared SQLx pool and apply the
//! `documents` table migration before accepting API traffic. Without a
//! `DATABASE_URL` the server never reaches this module and keeps documents
//! in memory instead.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Open the `PostgreSQL` pool backing the document store and migrate it.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}
