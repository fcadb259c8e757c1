//! Server initialization
//!
//! Builds the application from resolved configuration:
//!
//! 1. Connect the pool and apply migrations
//! 2. Ensure the uploads directory exists
//! 3. Derive the token keys from the configured secret
//! 4. Assemble the router around the shared state

use std::sync::Arc;

use axum::Router;

use crate::auth::sessions::TokenKeys;
use crate::routes::router::create_router;
use crate::server::config::{connect_database, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated, or the uploads
/// directory cannot be created. Startup errors are fatal; the server does
/// not run degraded.
pub async fn create_app(config: ServerConfig) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Initializing bugtrail server");

    let db_pool = connect_database(&config.database_url).await?;

    tokio::fs::create_dir_all(&config.uploads_dir).await?;

    let state = AppState {
        db_pool,
        token_keys: Arc::new(TokenKeys::from_secret(config.jwt_secret.as_bytes())),
        uploads_dir: Arc::new(config.uploads_dir),
    };

    tracing::info!("Router configured");

    Ok(create_router(state))
}
