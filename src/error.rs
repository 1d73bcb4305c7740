use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub links: usize,
}

/// Custom error type for API endpoints
///
/// Every variant maps to a fixed HTTP status and a JSON body of the form
/// `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// Request body is missing, is not JSON, or lacks a non-empty `url` string
    InvalidRequestBody,
    /// `url` field does not parse as a request URI
    InvalidUrl,
    /// Short key was never issued
    UrlNotFound,
    /// Unexpected failure while building a response
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidRequestBody => (StatusCode::BAD_REQUEST, "Invalid request body"),
            ApiError::InvalidUrl => (StatusCode::BAD_REQUEST, "Invalid URL"),
            ApiError::UrlNotFound => (StatusCode::NOT_FOUND, "URL not found"),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(ErrorResponse {
            error: error_message.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(_: serde_json::Error) -> Self {
        ApiError::InvalidRequestBody
    }
}
