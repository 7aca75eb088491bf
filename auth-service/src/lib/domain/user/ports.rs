use async_trait::async_trait;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for authentication domain operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already registered
    /// * `DatabaseError` - Store operation failed
    /// * `Unknown` - Hashing or another internal operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown username and wrong password are indistinguishable to the
    /// caller.
    ///
    /// # Arguments
    /// * `credentials` - Raw username and password
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `InvalidCredentials` - Username unknown or password mismatch
    /// * `DatabaseError` - Store operation failed
    /// * `Unknown` - Verification or token issuance failed internally
    async fn login(&self, credentials: Credentials) -> Result<String, UserError>;
}

/// Persistence operations for the user aggregate.
///
/// The store, not the caller, is the authority for username uniqueness;
/// callers pre-check and still handle a concurrent duplicate as a conflict.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Arguments
    /// * `user` - User entity to create
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameTaken` - Username is already taken
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
