use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::search::{SearchError, StoreError};

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Creates a 503 Service Unavailable error
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidPageRequest { .. } | SearchError::InvalidSort(_) => {
                Self::bad_request(err.to_string())
            }
            SearchError::Store(StoreError::Unavailable(_)) => {
                tracing::error!(error = %err, "Member search store unavailable");
                Self::service_unavailable(err.to_string())
            }
            SearchError::Store(StoreError::Query(_)) => {
                tracing::error!(error = %err, "Member search failed");
                Self::internal_server_error(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_page_request_is_bad_request() {
        let err = ApiError::from(SearchError::InvalidPageRequest {
            offset: 0,
            page_size: 0,
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unavailable_store_is_service_unavailable() {
        let err = ApiError::from(SearchError::Store(StoreError::Unavailable(
            "pool timed out".to_string(),
        )));
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.message.contains("pool timed out"));
    }

    #[test]
    fn failed_query_is_internal_error() {
        let err = ApiError::from(SearchError::Store(StoreError::Query("syntax".to_string())));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
