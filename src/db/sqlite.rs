use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// Creates a SQLite connection pool
///
/// The pool is opened once at startup and shared by every catalog query.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}
