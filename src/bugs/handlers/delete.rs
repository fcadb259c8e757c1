//! Delete bug handler
//!
//! Implements `DELETE /api/bug/{id}`. Hard delete, no tombstone; answers
//! 204 with no body.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::bugs::db;
use crate::error::ApiError;

/// Delete bug handler
///
/// # Errors
///
/// * `404 Not Found` - No bug with that id
/// * `500 Internal Server Error` - Malformed id or store failure
pub async fn delete_bug(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::validation("Invalid ID format"))?;

    if !db::delete_bug(&pool, id).await? {
        return Err(ApiError::not_found("Bug not found"));
    }

    tracing::info!("Bug deleted: {}", id);

    Ok(StatusCode::NO_CONTENT)
}
