//! Database initialization and migration runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to create the shared SQLx pool and bring the
//! portfolio schema up to date before accepting API or page traffic.


use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

fn parse_max_connections(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
}

fn db_max_connections() -> u32 {
    parse_max_connections(std::env::var("DB_MAX_CONNECTIONS").ok().as_deref())
}

/// Initialize the `PostgreSQL` connection pool and run migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let max_connections = db_max_connections();
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;
    tracing::info!(max_connections, "database ready");

    Ok(pool)
}
