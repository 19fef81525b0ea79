use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

/// Creates a PostgreSQL connection pool without opening a connection.
///
/// Persistence is best-effort, so an unreachable database must not keep the
/// API from starting. Connections are established on first use.
pub fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_lazy(database_url)?;

    info!("PostgreSQL connection pool configured (lazy)");
    Ok(pool)
}

/// Applies embedded migrations. Failures are logged; review writes will fail
/// (and be swallowed) until the schema exists.
pub async fn run_migrations(pool: &PgPool) {
    match sqlx::migrate!("./migrations").run(pool).await {
        Ok(()) => info!("Database migrations applied"),
        Err(e) => warn!("Database migrations skipped: {e}"),
    }
}
