//! Connection pool for the authentication provider's session database.
//!
//! SYSTEM CONTEXT
//! ==============
//! The schema belongs to the provider. Startup only opens the pool; no
//! migrations run from here.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Open a `PostgreSQL` pool against the provider database.
///
/// # Errors
///
/// Returns an error if the initial connection fails.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
