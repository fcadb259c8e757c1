//! Login handler
//!
//! Implements `POST /api/auth/login`.
//!
//! # Security Notes
//!
//! - An unknown username and a wrong password both return the identical
//!   response, so the endpoint cannot be used to enumerate users
//! - Password verification uses bcrypt's constant-time comparison
//! - Passwords are never logged or returned

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies the credentials and returns a bearer token valid for 24 hours.
///
/// # Errors
///
/// * `400 Bad Request` - Unknown username or wrong password (same body for
///   both)
/// * `500 Internal Server Error` - Store, hashing, or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    tracing::info!("Login request for username: {}", request.username);

    let user = get_user_by_username(&state.db_pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed, unknown username: {}", request.username);
            ApiError::bad_request("Invalid username or password")
        })?;

    let password = request.password;
    let password_hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || verify(&password, &password_hash)).await??;

    if !valid {
        tracing::warn!("Login failed, wrong password for user: {}", user.username);
        return Err(ApiError::bad_request("Invalid username or password"));
    }

    let token = create_token(&state.token_keys, user.id, &user.username)?;

    tracing::info!("User logged in: {}", user.username);

    Ok(Json(LoginResponse {
        token,
        message: "Login successful".to_string(),
    }))
}
