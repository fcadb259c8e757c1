//! HTTP handlers for authentication endpoints

/// Request/response types
pub mod types;

/// User registration handler
pub mod register;

/// User login handler
pub mod login;

pub use login::login;
pub use register::register;
