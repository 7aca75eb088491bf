use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims carried by a bearer token.
///
/// Serialized into the signed token payload; the signature binds these fields
/// to the signing secret. Tokens are self-contained and never stored
/// server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Username the token was issued for
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// Create claims for a user with expiration relative to now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `username` - Username
    /// * `ttl` - Time until the token expires
    pub fn new(user_id: impl ToString, username: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + ttl;

        Self {
            sub: user_id.to_string(),
            username: username.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}
