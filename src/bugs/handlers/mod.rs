//! HTTP handlers for bug endpoints

/// Request/response types
pub mod types;

/// Create a bug (multipart)
pub mod create;

/// List and search bugs
pub mod list;

/// Get a single bug
pub mod get;

/// Update a bug (multipart, partial)
pub mod update;

/// Delete a bug
pub mod delete;

/// Add a comment to a bug
pub mod comments;

/// Authenticated probe endpoint
pub mod protected;

pub use comments::add_comment;
pub use create::create_bug;
pub use delete::delete_bug;
pub use get::get_bug;
pub use list::{list_bugs, search_bugs};
pub use protected::protected;
pub use update::update_bug;
