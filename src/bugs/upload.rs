//! Multipart form parsing and image persistence
//!
//! The create and update endpoints accept `multipart/form-data` with text
//! fields (`title`, `description`, `priority`, `status`) and an optional
//! `image` file part. The image is written to the uploads directory before
//! the record is saved; there is no cleanup if the save later fails, and a
//! replaced image's old file stays on disk.

use std::path::Path;

use axum::extract::multipart::Multipart;
use chrono::Utc;

use crate::error::ApiError;

/// Parsed fields of a bug create/update form.
///
/// Absent and empty text fields both come through as `None`, so an update
/// leaves the corresponding stored value untouched.
#[derive(Debug, Default)]
pub struct BugForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    /// Relative path of a freshly saved image
    pub image: Option<String>,
}

/// Drain a multipart stream into a [`BugForm`], saving any image part.
///
/// Unknown fields are ignored. The saved file gets a unique name derived
/// from the upload time and the client's filename.
pub async fn parse_bug_form(
    multipart: &mut Multipart,
    uploads_dir: &Path,
) -> Result<BugForm, ApiError> {
    let mut form = BugForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => form.title = non_empty(field.text().await?),
            "description" => form.description = non_empty(field.text().await?),
            "priority" => form.priority = non_empty(field.text().await?),
            "status" => form.status = non_empty(field.text().await?),
            "image" => {
                let original = field.file_name().unwrap_or("upload").to_string();
                let data = field.bytes().await?;

                let filename = unique_filename(&original);
                tokio::fs::write(uploads_dir.join(&filename), &data).await?;
                tracing::debug!("Saved uploaded image: {}", filename);

                form.image = Some(format!("uploads/{filename}"));
            }
            _ => {}
        }
    }

    Ok(form)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Build a unique on-disk name: `<millis-since-epoch>-<client filename>`.
///
/// Any path components the client sent are stripped first.
fn unique_filename(original: &str) -> String {
    let base = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");
    format!("{}-{}", Utc::now().timestamp_millis(), base)
}
