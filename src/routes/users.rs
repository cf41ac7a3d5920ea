use axum::{
    extract::{Path, State},
    Json,
};

use crate::db;
use crate::error::{AppError, Result};
use crate::models::{Level, UpdatePointsRequest, User};
use crate::AppState;

/// Fetch a user by id
///
/// Returns 404 if no user has the given id.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>> {
    let user = db::users::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    Ok(Json(user))
}

/// Fetch a user by username
///
/// The path segment is percent-decoded by the router, so usernames with
/// spaces or non-ASCII characters work. Returns 404 on a miss.
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<User>> {
    let user = db::users::find_by_username(&state.pool, &username)
        .await?
        .ok_or(AppError::UserNotFound)?;

    Ok(Json(user))
}

/// Overwrite a user's points balance
///
/// The membership level is recomputed from the new balance and persisted
/// together with it in a single statement, so a read after this call
/// always sees a level consistent with the points. This is the only path
/// that keeps the two fields in sync.
///
/// Returns the refreshed record, or 404 if no user has the given id.
pub async fn update_user_points(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(payload): Json<UpdatePointsRequest>,
) -> Result<Json<User>> {
    let level = Level::for_points(payload.points);

    let user = db::users::save_points(&state.pool, user_id, payload.points, level.as_str())
        .await?
        .ok_or(AppError::UserNotFound)?;

    tracing::info!(
        "Updated user {}: points={}, level={}",
        user.id,
        user.points,
        user.level
    );

    Ok(Json(user))
}
