//! Database connection pool
//!
//! Connection settings arrive as `PgConnectOptions`, never as a hand-built
//! URL string, so credentials with reserved characters reach the server
//! intact.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open a pool of at most `max_connections` connections and verify one of
/// them.
pub async fn connect(options: PgConnectOptions, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database().unwrap_or_default(),
        max_connections,
        "connecting to postgres"
    );

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
