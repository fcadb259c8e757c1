//! Comment handler
//!
//! Implements `POST /api/bug/{id}/comments`. Comments are append-only;
//! text and author are stored as sent, without emptiness checks.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::bugs::db;
use crate::bugs::handlers::types::{CommentRequest, CommentsResponse};
use crate::bugs::model::Comment;
use crate::error::ApiError;

/// Add-comment handler
///
/// # Errors
///
/// * `404 Not Found` - No bug with that id
/// * `500 Internal Server Error` - Malformed id or store failure
pub async fn add_comment(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    Json(request): Json<CommentRequest>,
) -> Result<(StatusCode, Json<CommentsResponse>), ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::validation("Invalid ID format"))?;

    let mut bug = db::get_bug(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Bug not found"))?;

    bug.comments.push(Comment {
        text: request.text,
        author: request.author,
        created_at: Utc::now(),
    });

    db::update_bug(&pool, &mut bug).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentsResponse {
            message: "Comment added".to_string(),
            comments: bug.comments,
        }),
    ))
}
