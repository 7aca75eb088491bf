use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Example gated operation; the access guard has already attached the
/// verified identity.
pub async fn protected(
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ProtectedResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        ProtectedResponseData {
            message: format!(
                "Protected endpoint accessed successfully by user: {}",
                user.username
            ),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtectedResponseData {
    pub message: String,
}
