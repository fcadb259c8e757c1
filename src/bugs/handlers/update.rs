//! Update bug handler
//!
//! Implements `PUT /api/bug/{id}` (multipart, any subset of fields).
//! Supplied fields replace the stored values; absent and empty fields are
//! retained. A status change is logged to the history before the new
//! status takes effect.

use axum::extract::{Multipart, Path, State};
use axum::response::Json;
use chrono::Utc;
use uuid::Uuid;

use crate::bugs::db;
use crate::bugs::model::{Bug, Priority, Status};
use crate::bugs::upload::parse_bug_form;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Update bug handler
///
/// # Errors
///
/// * `404 Not Found` - No bug with that id
/// * `500 Internal Server Error` - Malformed id, invalid enum value, or
///   store failure
pub async fn update_bug(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<Bug>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::validation("Invalid ID format"))?;

    // The image (if any) hits the disk before the record lookup; a 404
    // after an upload still leaves the file behind.
    let form = parse_bug_form(&mut multipart, &state.uploads_dir).await?;

    let mut bug = db::get_bug(&state.db_pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Bug not found"))?;

    if let Some(raw) = form.status {
        let status = Status::from_str(&raw)
            .ok_or_else(|| ApiError::validation(format!("`{raw}` is not a valid status")))?;
        bug.apply_status(status, Utc::now());
    }
    if let Some(title) = form.title {
        bug.title = title;
    }
    if let Some(description) = form.description {
        bug.description = description;
    }
    if let Some(raw) = form.priority {
        bug.priority = Priority::from_str(&raw)
            .ok_or_else(|| ApiError::validation(format!("`{raw}` is not a valid priority")))?;
    }
    if let Some(image) = form.image {
        // The replaced image's file stays on disk.
        bug.image = Some(image);
    }

    db::update_bug(&state.db_pool, &mut bug).await?;

    tracing::info!("Bug updated: {}", bug.id);

    Ok(Json(bug))
}
