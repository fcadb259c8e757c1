//! Get bug handler
//!
//! Implements `GET /api/bug/{id}`.

use axum::extract::{Path, State};
use axum::response::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::bugs::db;
use crate::bugs::model::Bug;
use crate::error::ApiError;

/// Get a single bug by id
///
/// # Errors
///
/// * `400 Bad Request` - The id is not a well-formed UUID
/// * `404 Not Found` - No bug with that id
pub async fn get_bug(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<Bug>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid ID format"))?;

    let bug = db::get_bug(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Bug not found"))?;

    Ok(Json(bug))
}
