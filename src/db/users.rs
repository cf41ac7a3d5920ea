use sqlx::SqlitePool;

use crate::models::{Level, User};

/// Fetch a user by primary key
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, username, points, level FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Fetch a user by username
///
/// Usernames are unique, so this matches at most one row.
pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, username, points, level FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Overwrite a user's points and level in a single statement
///
/// Returns the refreshed row, or None when no user has the given id.
pub async fn save_points(
    pool: &SqlitePool,
    id: i64,
    points: f64,
    level: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET points = ?, level = ? WHERE id = ? \
         RETURNING id, username, points, level",
    )
    .bind(points)
    .bind(level)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert the default record if no user with this username exists yet
///
/// Guarded by an existence check on username, so calling this on every
/// startup never creates a duplicate seed record.
pub async fn ensure_seed_user(
    pool: &SqlitePool,
    username: &str,
    points: f64,
) -> Result<(), sqlx::Error> {
    if find_by_username(pool, username).await?.is_some() {
        return Ok(());
    }

    let level = Level::for_points(points);
    sqlx::query("INSERT INTO users (username, points, level) VALUES (?, ?, ?)")
        .bind(username)
        .bind(points)
        .bind(level.as_str())
        .execute(pool)
        .await?;

    tracing::info!("Seeded default user: {}", username);

    Ok(())
}
