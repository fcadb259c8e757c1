//! API route table
//!
//! # Routes
//!
//! ## Authentication (public)
//! - `POST /api/auth/register` - Create an account
//! - `POST /api/auth/login` - Exchange credentials for a bearer token
//!
//! ## Bugs (bearer token required)
//! - `GET /api/bug` - List all bugs
//! - `POST /api/bug` - Create a bug (multipart, optional image)
//! - `GET /api/bug/search` - Filter by status and/or priority
//! - `GET /api/bug/protected` - Authenticated probe
//! - `GET /api/bug/{id}` - Fetch one bug
//! - `PUT /api/bug/{id}` - Partial update (multipart)
//! - `DELETE /api/bug/{id}` - Hard delete
//! - `POST /api/bug/{id}/comments` - Append a comment

use axum::{middleware::from_fn_with_state, Router};

use crate::auth::{login, register};
use crate::bugs::handlers::{
    add_comment, create_bug, delete_bug, get_bug, list_bugs, protected, search_bugs, update_bug,
};
use crate::middleware::auth_middleware;
use crate::server::state::AppState;

/// Configure API routes
///
/// Every bug route sits behind the bearer-token gate; the auth routes are
/// public.
pub fn configure_api_routes(router: Router<AppState>, state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .route(
            "/api/bug",
            axum::routing::post(create_bug).get(list_bugs),
        )
        .route("/api/bug/search", axum::routing::get(search_bugs))
        .route("/api/bug/protected", axum::routing::get(protected))
        .route(
            "/api/bug/{id}",
            axum::routing::get(get_bug)
                .put(update_bug)
                .delete(delete_bug),
        )
        .route(
            "/api/bug/{id}/comments",
            axum::routing::post(add_comment),
        )
        .route_layer(from_fn_with_state(state, auth_middleware));

    router
        .route("/api/auth/register", axum::routing::post(register))
        .route("/api/auth/login", axum::routing::post(login))
        .merge(protected_routes)
}
