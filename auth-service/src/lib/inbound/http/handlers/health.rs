use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;

/// Liveness probe; no authentication required.
pub async fn health() -> Result<ApiSuccess<HealthResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        HealthResponseData {
            message: "Service is healthy".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    pub message: String,
}
