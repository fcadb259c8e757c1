//! Router configuration
//!
//! Assembles the full Axum router:
//!
//! 1. Root liveness route
//! 2. API routes (auth, bugs)
//! 3. Static serving of uploaded images under `/uploads`
//! 4. Fallback handler for unknown paths
//!
//! Request tracing and permissive CORS apply to every route.

use axum::{http::StatusCode, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

async fn root() -> &'static str {
    "Bug Tracker API is running!"
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `state` - Application state (pool, token keys, uploads directory)
pub fn create_router(state: AppState) -> Router {
    let uploads_dir = state.uploads_dir.as_ref().clone();

    let router = Router::new().route("/", get(root));

    // Add API routes
    let router = configure_api_routes(router, state.clone());

    router
        // Serve uploaded images
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
