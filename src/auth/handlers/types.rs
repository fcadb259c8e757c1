//! Authentication handler types
//!
//! Request and response bodies shared by the registration and login
//! handlers.

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    /// Clear-text password; hashed before storage, never persisted or logged
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response: the bearer token plus a confirmation message
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
}

/// Generic `{"message": ...}` response body
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}
