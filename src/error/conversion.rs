//! Error conversion
//!
//! Implements `IntoResponse` for [`ApiError`] so handlers can return it
//! directly. Responses are JSON bodies of the form `{"message": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal failures are logged with their real cause; the client
        // only ever sees the generic message.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            match &self {
                ApiError::Handler { .. } | ApiError::Validation(_) => {}
                other => tracing::error!("request failed: {:?}", other),
            }
        }

        let body = serde_json::json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}
