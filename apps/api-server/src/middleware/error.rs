//! Error handling - every failure is rendered as `{"message": "..."}`.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode};
use blog_core::error::RepoError;
use blog_shared::MessageResponse;
use thiserror::Error;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn post_not_found() -> Self {
        AppError::NotFound(MessageResponse::POST_NOT_FOUND.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(message) | AppError::BadRequest(message) => {
                MessageResponse::new(message.as_str())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                MessageResponse::new("Internal server error")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Operation(msg) => AppError::Internal(msg),
        }
    }
}

/// Turns query string extraction failures into `400 {"message": ...}`.
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected query string");
    AppError::BadRequest(format!("Invalid query string: {err}")).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, MessageResponse) {
        let resp = err.error_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_not_found_body() {
        let (status, body) = body_of(AppError::post_not_found()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, MessageResponse::post_not_found());
    }

    #[actix_web::test]
    async fn test_repo_errors_hide_details() {
        let err: AppError = RepoError::Operation("store rejected write".to_string()).into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal server error");
        assert!(!body.message.contains("store rejected write"));
    }

    #[actix_web::test]
    async fn test_bad_request_keeps_message() {
        let (status, body) = body_of(AppError::BadRequest("Invalid JSON body".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Invalid JSON body");
    }
}
