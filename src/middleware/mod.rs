//! Request middleware

/// Bearer-token authentication gate
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
