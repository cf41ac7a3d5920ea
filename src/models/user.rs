use serde::{Deserialize, Serialize};

/// User record as stored in the users table and returned by the API
///
/// `level` is derived from `points` by the update path; lookups return
/// the stored value verbatim without re-validating it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Primary key, assigned by the store on creation
    pub id: i64,
    /// Unique across all records, immutable through the exposed operations
    pub username: String,
    /// Points balance, mutable via the update operation
    pub points: f64,
    /// Membership tier label
    pub level: String,
}

/// Request body for the update-points operation
#[derive(Debug, Deserialize)]
pub struct UpdatePointsRequest {
    pub points: f64,
}
