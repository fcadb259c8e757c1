//! Server configuration
//!
//! All configuration is resolved from the environment once at startup and
//! injected from there; nothing is hard-coded in handlers. The signing
//! secret is required and startup fails fast without it.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default `sqlite:bugtrail.db`)
//! - `JWT_SECRET` - token signing secret, required
//! - `UPLOADS_DIR` - directory for uploaded images (default `uploads`)
//! - `SERVER_PORT` - listen port (default 3000)

use std::path::PathBuf;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set")]
    MissingJwtSecret,
    #[error("invalid SERVER_PORT value: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),
}

/// Process-wide configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite connection string
    pub database_url: String,
    /// Token signing secret
    pub jwt_secret: String,
    /// Directory uploaded images are written to and served from
    pub uploads_dir: PathBuf,
    /// Listen port
    pub port: u16,
}

impl ServerConfig {
    /// Resolve configuration from the environment
    ///
    /// # Errors
    ///
    /// Fails when `JWT_SECRET` is unset or `SERVER_PORT` is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set, using local file sqlite:bugtrail.db");
            "sqlite:bugtrail.db".to_string()
        });

        let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingJwtSecret)?;

        let uploads_dir = std::env::var("UPLOADS_DIR")
            .unwrap_or_else(|_| "uploads".to_string())
            .into();

        let port = match std::env::var("SERVER_PORT") {
            Ok(value) => value.parse()?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            uploads_dir,
            port,
        })
    }
}

/// Create the connection pool and apply migrations
pub async fn connect_database(
    database_url: &str,
) -> Result<SqlitePool, Box<dyn std::error::Error>> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    tracing::info!("Database ready");
    Ok(pool)
}
