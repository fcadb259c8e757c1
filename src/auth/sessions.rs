//! Session tokens
//!
//! JWT generation and validation for user sessions. Tokens are HS256-signed
//! with a process-wide secret resolved from configuration at startup and
//! carry the user id and username. There is no rotation and no revocation
//! list; a token stays valid until it expires.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tokens expire 24 hours after issuance.
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Username
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing and verification keys derived from the configured secret.
///
/// Built once at startup from [`ServerConfig`](crate::server::config::ServerConfig)
/// and shared through the application state.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Create a signed token for a user
///
/// # Arguments
/// * `keys` - Signing keys from the application state
/// * `user_id` - User ID (UUID)
/// * `username` - Username embedded in the claims
///
/// # Returns
/// Encoded JWT string, valid for [`TOKEN_TTL_SECS`] from now
pub fn create_token(
    keys: &TokenKeys,
    user_id: Uuid,
    username: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp() as u64;

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    encode(&Header::default(), &claims, &keys.encoding)
}

/// Verify and decode a token
///
/// Validates the signature and the expiry. Fails on a malformed token, a
/// signature mismatch, or an expired token.
pub fn verify_token(
    keys: &TokenKeys,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(token, &keys.decoding, &Validation::default())?;
    Ok(token_data.claims)
}
