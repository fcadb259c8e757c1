//! Bug Tracking Module
//!
//! This module holds the bug data model, its persistence layer, multipart
//! form parsing with image uploads, and the HTTP handlers for the bug CRUD
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! bugs/
//! ├── mod.rs       - Module exports
//! ├── model.rs     - Bug, Priority, Status, StatusChange, Comment
//! ├── db.rs        - Database operations
//! ├── upload.rs    - Multipart parsing and image persistence
//! └── handlers/    - HTTP handlers, one file per endpoint
//! ```
//!
//! # Status History
//!
//! Every bug carries an append-only log of status transitions. An entry is
//! recorded exactly when an update changes the status to a different value;
//! the old value is captured before the new one is assigned.

/// Bug data model
pub mod model;

/// Database operations
pub mod db;

/// Multipart form parsing and image persistence
pub mod upload;

/// HTTP handlers for bug endpoints
pub mod handlers;

pub use model::{Bug, Comment, Priority, Status, StatusChange};
