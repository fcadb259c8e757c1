//! Create bug handler
//!
//! Implements `POST /api/bug` (multipart). Title, description, and priority
//! are required; status defaults to Open; an `image` part is saved to disk
//! and its path stored on the record.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::bugs::db::{self, NewBug};
use crate::bugs::model::{Bug, Priority, Status};
use crate::bugs::upload::parse_bug_form;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Create bug handler
///
/// # Errors
///
/// * `500 Internal Server Error` - Missing required field, invalid enum
///   value, or store failure (record validation reports as a save error;
///   the validation message is included in the body)
pub async fn create_bug(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Bug>), ApiError> {
    let form = parse_bug_form(&mut multipart, &state.uploads_dir).await?;

    let title = form
        .title
        .ok_or_else(|| ApiError::validation("title is required"))?;
    let description = form
        .description
        .ok_or_else(|| ApiError::validation("description is required"))?;
    let priority = form
        .priority
        .ok_or_else(|| ApiError::validation("priority is required"))?;
    let priority = Priority::from_str(&priority)
        .ok_or_else(|| ApiError::validation(format!("`{priority}` is not a valid priority")))?;

    let status = match form.status {
        Some(raw) => Status::from_str(&raw)
            .ok_or_else(|| ApiError::validation(format!("`{raw}` is not a valid status")))?,
        None => Status::default(),
    };

    let bug = db::create_bug(
        &state.db_pool,
        NewBug {
            title,
            description,
            priority,
            status,
            image: form.image,
        },
    )
    .await?;

    tracing::info!("Bug created: {}", bug.id);

    Ok((StatusCode::CREATED, Json(bug)))
}
