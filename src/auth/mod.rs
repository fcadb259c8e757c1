//! Authentication Module
//!
//! This module handles user registration, login, and token issuance.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token issue and verification
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     └── login.rs    - User login handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password -> bcrypt hash stored -> 201, no session
//! 2. **Login**: credentials verified -> signed JWT returned (24 hour expiry)
//! 3. **Protected request**: `Authorization: Bearer <token>` verified by the
//!    middleware gate, decoded identity attached to the request
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never logged
//! - Unknown username and wrong password produce the identical error
//!   response, so the API does not reveal which usernames exist
//! - Tokens cannot be revoked before expiry; logout is client-side only

/// User model and database operations
pub mod users;

/// JWT token issue and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
pub use handlers::{login, register};
