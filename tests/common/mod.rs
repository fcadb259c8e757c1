//! Common test utilities and helpers
//!
//! Shared fixtures for the HTTP integration tests: an app instance backed
//! by an in-memory database and a throwaway uploads directory, plus
//! authentication helpers.

pub mod auth_helpers;
pub mod database;

use std::sync::Arc;

use axum_test::TestServer;
use bugtrail::auth::sessions::TokenKeys;
use bugtrail::routes::create_router;
use bugtrail::server::state::AppState;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Signing secret every test server is built with
pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// A running application instance for one test
pub struct TestApp {
    pub server: TestServer,
    /// Direct pool access for assertions against stored data
    pub pool: SqlitePool,
    /// Keeps the uploads directory alive for the duration of the test
    pub uploads: TempDir,
}

/// Spin up the full router on an in-memory database
pub async fn spawn_app() -> TestApp {
    let pool = database::create_test_pool().await;
    let uploads = tempfile::tempdir().expect("Failed to create uploads dir");

    let state = AppState {
        db_pool: pool.clone(),
        token_keys: Arc::new(TokenKeys::from_secret(TEST_SECRET)),
        uploads_dir: Arc::new(uploads.path().to_path_buf()),
    };

    let server = TestServer::new(create_router(state)).expect("Failed to start test server");

    TestApp {
        server,
        pool,
        uploads,
    }
}
