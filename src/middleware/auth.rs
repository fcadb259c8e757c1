//! Authentication middleware
//!
//! Protects routes that require a logged-in user. The gate extracts the
//! bearer token from the `Authorization` header, verifies it, and attaches
//! the decoded identity to the request for downstream handlers. It never
//! mutates state.
//!
//! # Status Codes
//!
//! - Missing header, or a header that is not `Bearer <token>`: 401
//! - Header present but the token is malformed, forged, or expired: 400

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated identity decoded from the bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Authentication middleware
///
/// 1. Extracts the token from the `Authorization: Bearer <token>` header
/// 2. Verifies signature and expiry
/// 3. Attaches [`AuthenticatedUser`] to the request extensions
///
/// Requests without a well-formed header are rejected with 401; requests
/// carrying an invalid or expired token are rejected with 400.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthorized("Access denied. No or malformed token provided.")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Malformed Authorization header");
        ApiError::unauthorized("Access denied. No or malformed token provided.")
    })?;

    let claims = verify_token(&state.token_keys, token).map_err(|e| {
        tracing::warn!("Token verification failed: {:?}", e);
        ApiError::bad_request("Invalid token")
    })?;

    // A token whose subject is not a UUID was not issued by this service.
    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user id in token: {:?}", e);
        ApiError::bad_request("Invalid token")
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Handlers behind the gate can take `AuthUser(user)` as a parameter to
/// read the identity the middleware attached.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthorized("Access denied. No or malformed token provided.")
            })?;

        Ok(AuthUser(user))
    }
}
