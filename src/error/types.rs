//! API error types
//!
//! Handlers construct [`ApiError::Handler`] for failures whose status code
//! and message are part of the route contract (404 for a missing bug, 400
//! for a malformed id, and so on). Infrastructure failures convert in via
//! `#[from]` and all map to 500 with a generic client message.

use axum::http::StatusCode;
use thiserror::Error;

/// All errors an HTTP handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Route-level error with an explicit status code and client message
    #[error("{message}")]
    Handler {
        /// HTTP status code for this error
        status: StatusCode,
        /// Message returned to the client
        message: String,
    },

    /// Invalid or missing field in a submitted bug record.
    ///
    /// Answered with 500: bug create/update report validation failures as
    /// store-save errors, and the message is included in the body.
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Password hashing error
    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing error
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Multipart form decoding error
    #[error(transparent)]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// Filesystem error (image uploads)
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Blocking-task join error (password hashing runs on the blocking pool)
    #[error(transparent)]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ApiError {
    /// Create a handler error with an explicit status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Handler {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// 401 Unauthorized
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// Record validation failure (answered with 500, message included)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Handler { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client.
    ///
    /// Internal errors all render the same generic message; the real error
    /// is logged server-side when the response is built.
    pub fn message(&self) -> String {
        match self {
            Self::Handler { message, .. } => message.clone(),
            Self::Validation(message) => message.clone(),
            _ => "Internal server error".to_string(),
        }
    }
}
