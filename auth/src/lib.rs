//! Authentication primitives library
//!
//! Provides the cryptographic core for the authentication service:
//! - Password hashing (Argon2id)
//! - Bearer token issuance and verification (HMAC-signed JWT)
//!
//! The service crate composes these into registration, login, and access
//! gating; this crate stays free of any persistence or HTTP concerns.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//! let token = tokens.issue("user123", "alice").unwrap();
//! let claims = tokens.verify(&token).unwrap();
//! assert_eq!(claims.username, "alice");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenClaims;
pub use token::TokenError;
pub use token::TokenService;
