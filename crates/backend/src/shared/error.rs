use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::shared::gateway::GatewayError;

pub const CONFIGURATION_MESSAGE: &str = "Apps Script URL is not configured";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to communicate with the data service";
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Everything a route can fail with, rendered as JSON
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Upstream answered `success: false`
    #[error("{0}")]
    Upstream(String),

    #[error("{}", CONFIGURATION_MESSAGE)]
    Configuration,

    /// Transport or decoding trouble with the data service
    #[error("data service failure: {0}")]
    Service(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) | ApiError::Upstream(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Configuration | ApiError::Service(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            // Auth failures keep their own historical shape
            ApiError::Unauthorized => json!({"error": "Unauthorized"}),
            ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::Upstream(message) => json!({"success": false, "message": message}),
            ApiError::Configuration => {
                tracing::error!("{}", CONFIGURATION_MESSAGE);
                json!({"success": false, "message": CONFIGURATION_MESSAGE})
            }
            ApiError::Service(cause) => {
                tracing::error!("Data service failure: {}", cause);
                json!({"success": false, "message": UPSTREAM_FAILURE_MESSAGE})
            }
            ApiError::Internal(cause) => {
                tracing::error!("Internal error: {}", cause);
                json!({"success": false, "message": INTERNAL_MESSAGE})
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotConfigured => ApiError::Configuration,
            GatewayError::Rejected(message) => ApiError::Upstream(message),
            GatewayError::NotFound(message) => ApiError::NotFound(message),
            other @ (GatewayError::Transport(_)
            | GatewayError::NonJson(_)
            | GatewayError::Decode(_)) => ApiError::Service(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}
