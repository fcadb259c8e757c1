//! Bugtrail - Main Library
//!
//! Bugtrail is a bug-tracking REST API built on Axum. It authenticates users
//! with bcrypt-hashed passwords and JWT bearer tokens, stores bug reports in
//! SQLite via sqlx, keeps an append-only status change history per bug, and
//! supports comments and image attachments.
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - Configuration loading, shared application state, and
//!   app assembly (pool creation, migrations, router construction)
//! - **`routes`** - The HTTP route table and top-level router
//! - **`auth`** - User accounts, password hashing, JWT issue/verify, and
//!   the registration/login handlers
//! - **`middleware`** - The bearer-token gate applied to protected routes
//! - **`bugs`** - The bug data model, database operations, multipart form
//!   parsing with image persistence, and the CRUD handlers
//! - **`error`** - The API error type and its HTTP response conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use bugtrail::server::config::ServerConfig;
//! use bugtrail::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```
//!
//! # Request Flow
//!
//! client -> router -> auth middleware (protected routes) -> handler ->
//! database -> JSON response. Handlers are stateless; the only state shared
//! between requests is the connection pool and static configuration held in
//! [`server::state::AppState`].

/// User accounts, sessions, and authentication handlers
pub mod auth;

/// Bug model, persistence, uploads, and CRUD handlers
pub mod bugs;

/// API error type and HTTP response conversion
pub mod error;

/// Request middleware (bearer-token gate)
pub mod middleware;

/// HTTP route configuration
pub mod routes;

/// Server configuration, state, and initialization
pub mod server;
