//! Bug handler types

use serde::{Deserialize, Serialize};

use crate::bugs::model::Comment;

/// Query parameters for `GET /api/bug/search`
#[derive(Debug, Deserialize)]
pub struct BugFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Body of `POST /api/bug/{id}/comments`
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentRequest {
    pub text: String,
    pub author: String,
}

/// Response of a successful comment append: confirmation plus the full
/// comment list in insertion order
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentsResponse {
    pub message: String,
    pub comments: Vec<Comment>,
}
