use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::constants::WELCOME_MESSAGE;
use crate::AppState;

/// Root endpoint
///
/// Returns a static welcome message with no parameters.
pub async fn read_root() -> Json<Value> {
    Json(json!({
        "message": WELCOME_MESSAGE,
    }))
}

/// Health check endpoint
///
/// Returns the health status of the server and database connection.
/// Used by load balancers and monitoring systems.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_status = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "connected",
        Err(e) => {
            tracing::error!("Database health check failed: {:?}", e);
            "disconnected"
        }
    };

    Json(json!({
        "status": if db_status == "connected" { "healthy" } else { "unhealthy" },
        "database": db_status,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
