pub mod pool;
pub mod users;

pub use pool::create_pool;

use sqlx::SqlitePool;

/// Create the users table if it does not exist
///
/// Called once at startup, before any request is served.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            points REAL NOT NULL DEFAULT 2500.0,
            level TEXT NOT NULL DEFAULT 'Silver Member'
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database schema initialized");

    Ok(())
}
