//! Authenticated probe endpoint
//!
//! Implements `GET /api/bug/protected`: greets the caller by the username
//! decoded from their token. Useful for checking a token without touching
//! any records.

use axum::response::Json;

use crate::auth::handlers::types::MessageResponse;
use crate::middleware::AuthUser;

pub async fn protected(AuthUser(user): AuthUser) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!("Hello, {}, you are authenticated!", user.username),
    })
}
