//! PostgreSQL access for the orders report service.
//!
//! - [`models`]: row structs for `customers`, `orders`, `order_items`
//! - [`repositories`]: one unit struct per table, all methods take `&PgPool`
//! - [`fetch`]: the naive and eager fetch strategies behind [`fetch::FetchStrategy`]
//! - [`report`]: folds fetched orders into flat report rows

use sqlx::postgres::PgPoolOptions;

pub mod fetch;
pub mod models;
pub mod report;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
