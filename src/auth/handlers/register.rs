//! Registration handler
//!
//! Implements `POST /api/auth/register`.
//!
//! # Registration Process
//!
//! 1. Check whether the username is taken (case-sensitive exact match)
//! 2. Hash the password with bcrypt on the blocking pool
//! 3. Store the new user
//! 4. Return 201 with a confirmation message (no session is issued)

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::auth::users::{create_user, get_user_by_username};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Username already taken
/// * `500 Internal Server Error` - Store or hashing failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    tracing::info!("Registration request for username: {}", request.username);

    if get_user_by_username(&state.db_pool, &request.username)
        .await?
        .is_some()
    {
        tracing::warn!("Username already taken: {}", request.username);
        return Err(ApiError::bad_request("Username already taken"));
    }

    // bcrypt at DEFAULT_COST takes on the order of 100ms, so it runs on the
    // blocking pool instead of stalling the async worker.
    let password = request.password;
    let password_hash =
        tokio::task::spawn_blocking(move || hash(&password, DEFAULT_COST)).await??;

    let user = create_user(&state.db_pool, &request.username, &password_hash).await?;

    tracing::info!("User registered: {}", user.username);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}
