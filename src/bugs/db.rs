//! Database operations for bugs
//!
//! Each bug row is a self-contained record: the status history and comment
//! list live in JSON columns, so create and update each write the whole
//! record in one statement. Two concurrent updates to the same bug resolve
//! last-write-wins; there is no version token.

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::types::Json;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::bugs::model::{Bug, Comment, Priority, Status, StatusChange};

/// Fields supplied when creating a bug
#[derive(Debug)]
pub struct NewBug {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub image: Option<String>,
}

fn bug_from_row(row: &SqliteRow) -> Bug {
    Bug {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        priority: Priority::from_str(&row.get::<String, _>("priority")).unwrap_or_default(),
        status: Status::from_str(&row.get::<String, _>("status")).unwrap_or_default(),
        image: row.get("image"),
        status_history: row
            .get::<Json<Vec<StatusChange>>, _>("status_history")
            .0,
        comments: row.get::<Json<Vec<Comment>>, _>("comments").0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Insert a new bug and return the stored record
pub async fn create_bug(pool: &SqlitePool, new: NewBug) -> Result<Bug, sqlx::Error> {
    let now = Utc::now();
    let bug = Bug {
        id: Uuid::new_v4(),
        title: new.title,
        description: new.description,
        priority: new.priority,
        status: new.status,
        image: new.image,
        status_history: Vec::new(),
        comments: Vec::new(),
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO bugs (id, title, description, priority, status, image,
                          status_history, comments, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(bug.id)
    .bind(&bug.title)
    .bind(&bug.description)
    .bind(bug.priority.as_str())
    .bind(bug.status.as_str())
    .bind(&bug.image)
    .bind(Json(&bug.status_history))
    .bind(Json(&bug.comments))
    .bind(bug.created_at)
    .bind(bug.updated_at)
    .execute(pool)
    .await?;

    Ok(bug)
}

/// Get a bug by id
pub async fn get_bug(pool: &SqlitePool, id: Uuid) -> Result<Option<Bug>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, title, description, priority, status, image,
               status_history, comments, created_at, updated_at
        FROM bugs
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| bug_from_row(&r)))
}

/// List all bugs in creation order
pub async fn list_bugs(pool: &SqlitePool) -> Result<Vec<Bug>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, title, description, priority, status, image,
               status_history, comments, created_at, updated_at
        FROM bugs
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(bug_from_row).collect())
}

/// List bugs matching the given filters.
///
/// Both filters are optional and combine with AND. Values are compared
/// exactly against the stored strings, so an unknown value matches nothing.
pub async fn search_bugs(
    pool: &SqlitePool,
    status: Option<&str>,
    priority: Option<&str>,
) -> Result<Vec<Bug>, sqlx::Error> {
    const COLUMNS: &str = "id, title, description, priority, status, image, \
                           status_history, comments, created_at, updated_at";

    let rows = match (status, priority) {
        (Some(s), Some(p)) => {
            sqlx::query(&format!(
                "SELECT {COLUMNS} FROM bugs WHERE status = ? AND priority = ? ORDER BY created_at"
            ))
            .bind(s)
            .bind(p)
            .fetch_all(pool)
            .await?
        }
        (Some(s), None) => {
            sqlx::query(&format!(
                "SELECT {COLUMNS} FROM bugs WHERE status = ? ORDER BY created_at"
            ))
            .bind(s)
            .fetch_all(pool)
            .await?
        }
        (None, Some(p)) => {
            sqlx::query(&format!(
                "SELECT {COLUMNS} FROM bugs WHERE priority = ? ORDER BY created_at"
            ))
            .bind(p)
            .fetch_all(pool)
            .await?
        }
        (None, None) => {
            sqlx::query(&format!(
                "SELECT {COLUMNS} FROM bugs ORDER BY created_at"
            ))
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows.iter().map(bug_from_row).collect())
}

/// Persist a modified bug, rewriting the whole record.
///
/// Bumps `updated_at`; `created_at` is never touched.
pub async fn update_bug(pool: &SqlitePool, bug: &mut Bug) -> Result<(), sqlx::Error> {
    bug.updated_at = Utc::now();

    sqlx::query(
        r#"
        UPDATE bugs
        SET title = ?, description = ?, priority = ?, status = ?, image = ?,
            status_history = ?, comments = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&bug.title)
    .bind(&bug.description)
    .bind(bug.priority.as_str())
    .bind(bug.status.as_str())
    .bind(&bug.image)
    .bind(Json(&bug.status_history))
    .bind(Json(&bug.comments))
    .bind(bug.updated_at)
    .bind(bug.id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a bug. Returns false when no record with that id exists.
pub async fn delete_bug(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM bugs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
