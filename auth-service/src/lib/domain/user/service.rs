use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenService;
use chrono::Utc;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for authentication operations.
///
/// Concrete implementation of AuthServicePort with dependency injection.
/// Argon2 work runs on the blocking pool so it never stalls the cooperative
/// scheduler.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
    token_service: Arc<TokenService>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `token_service` - Token issuance, sharing the process-wide secret
    ///
    /// # Returns
    /// Configured authentication service instance
    pub fn new(repository: Arc<UR>, token_service: Arc<TokenService>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_service,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Friendly pre-check; the store's unique constraint remains the
        // authority for concurrent duplicates.
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameTaken(command.username.to_string()));
        }

        let hasher = self.password_hasher.clone();
        let password = command.password.into_inner();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            password_hash,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn login(&self, credentials: Credentials) -> Result<String, UserError> {
        // A name that fails the username shape cannot belong to any record;
        // report it exactly like an unknown user.
        let username = match Username::new(credentials.username) {
            Ok(username) => username,
            Err(_) => return Err(UserError::InvalidCredentials),
        };

        let user = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let hasher = self.password_hasher.clone();
        let password = credentials.password;
        let stored_hash = user.password_hash.clone();
        let is_valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?;

        if !is_valid {
            return Err(UserError::InvalidCredentials);
        }

        self.token_service
            .issue(user.id, user.username.as_str())
            .map_err(|e| UserError::Unknown(format!("Token issuance failed: {}", e)))
    }
}
