//! Server Module
//!
//! Configuration loading, shared application state, and server assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - ServerConfig from environment, database connection
//! ├── state.rs  - AppState and FromRef impls
//! └── init.rs   - create_app(): pool, migrations, uploads dir, router
//! ```

/// Configuration loading and database connection
pub mod config;

/// Shared application state
pub mod state;

/// Server initialization
pub mod init;
