use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::FieldViolation;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn register<S: AuthServicePort>(
    State(state): State<AppState<S>>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    // Shape is checked in full, before any store access.
    let command = body.try_into_command()?;

    state
        .auth_service
        .register(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Clone, Deserialize)]
pub struct RegisterRequestBody {
    username: String,
    password: String,
}

impl RegisterRequestBody {
    /// Validate both fields, collecting every violation rather than stopping
    /// at the first.
    fn try_into_command(self) -> Result<RegisterUserCommand, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let username = match Username::new(self.username) {
            Ok(username) => Some(username),
            Err(e) => {
                violations.push(FieldViolation::new("username", e.to_string()));
                None
            }
        };

        let password = match Password::new(self.password) {
            Ok(password) => Some(password),
            Err(e) => {
                violations.push(FieldViolation::new("password", e.to_string()));
                None
            }
        };

        match (username, password) {
            (Some(username), Some(password)) => Ok(RegisterUserCommand::new(username, password)),
            _ => Err(violations),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for RegisterResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
