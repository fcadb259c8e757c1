//! Application state
//!
//! [`AppState`] is the central state container handed to the router. All
//! fields are cheap to clone and safe to share: the pool manages its own
//! connections and the rest is immutable configuration, so handlers stay
//! stateless between requests.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::sessions::TokenKeys;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Token signing and verification keys
    pub token_keys: Arc<TokenKeys>,

    /// Directory uploaded images are written to
    pub uploads_dir: Arc<PathBuf>,
}

/// Lets handlers that only touch the database extract `State<SqlitePool>`
/// directly instead of the whole `AppState`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
