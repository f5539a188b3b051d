use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Body returned whenever TMDb answers with a non-success status
pub const UPSTREAM_STATUS_MESSAGE: &str = "Failed to fetch data from TMDb";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("TMDb returned status {0}")]
    UpstreamStatus(StatusCode),

    #[error("TMDb request timed out")]
    UpstreamTimeout,

    #[error("TMDb unreachable: {0}")]
    UpstreamUnavailable(String),

    #[error("TMDb response could not be decoded: {0}")]
    UpstreamDecode(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // request URLs carry `api_key`; never let them reach a message
        let err = err.without_url();
        if err.is_timeout() {
            AppError::UpstreamTimeout
        } else if err.is_decode() {
            AppError::UpstreamDecode(err.to_string())
        } else {
            AppError::UpstreamUnavailable(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let (status, message) = match self {
            AppError::UpstreamStatus(status) => (status, UPSTREAM_STATUS_MESSAGE.to_string()),
            AppError::UpstreamTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "Timed out waiting for TMDb".to_string(),
            ),
            AppError::UpstreamUnavailable(_) => {
                (StatusCode::BAD_GATEWAY, "Failed to reach TMDb".to_string())
            }
            AppError::UpstreamDecode(_) => (
                StatusCode::BAD_GATEWAY,
                "Invalid response from TMDb".to_string(),
            ),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_is_forwarded() {
        let response = AppError::UpstreamStatus(StatusCode::NOT_FOUND).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::UpstreamStatus(StatusCode::UNAUTHORIZED).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_failure_kinds_map_to_distinct_statuses() {
        assert_eq!(
            AppError::UpstreamTimeout.into_response().status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            AppError::UpstreamUnavailable("refused".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::UpstreamDecode("eof".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Internal("boom".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
