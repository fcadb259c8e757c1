//! List and search handlers
//!
//! `GET /api/bug` returns every bug. `GET /api/bug/search` filters by exact
//! status and/or priority; when both are given they combine with AND.

use axum::extract::{Query, State};
use axum::response::Json;
use sqlx::SqlitePool;

use crate::bugs::db;
use crate::bugs::handlers::types::BugFilter;
use crate::bugs::model::Bug;
use crate::error::ApiError;

/// List all bugs
pub async fn list_bugs(State(pool): State<SqlitePool>) -> Result<Json<Vec<Bug>>, ApiError> {
    let bugs = db::list_bugs(&pool).await?;
    Ok(Json(bugs))
}

/// Search bugs by status and/or priority
pub async fn search_bugs(
    State(pool): State<SqlitePool>,
    Query(filter): Query<BugFilter>,
) -> Result<Json<Vec<Bug>>, ApiError> {
    let bugs = db::search_bugs(
        &pool,
        filter.status.as_deref(),
        filter.priority.as_deref(),
    )
    .await?;
    Ok(Json(bugs))
}
