use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ApiGatewayError {
    #[error("{0}")]
    BadRequestException(String),
    #[error("{0}")]
    NotFoundException(String),
    #[error("{0}")]
    ConflictException(String),
    #[error("{0}")]
    ValidationException(String),
    #[error("{0}")]
    AccessDeniedException(String),
}

impl ApiGatewayError {
    pub fn error_type(&self) -> &str {
        match self {
            ApiGatewayError::BadRequestException(_) => "BadRequestException",
            ApiGatewayError::NotFoundException(_) => "NotFoundException",
            ApiGatewayError::ConflictException(_) => "ConflictException",
            ApiGatewayError::ValidationException(_) => "ValidationException",
            ApiGatewayError::AccessDeniedException(_) => "AccessDeniedException",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiGatewayError::BadRequestException(_) => StatusCode::BAD_REQUEST,
            ApiGatewayError::NotFoundException(_) => StatusCode::NOT_FOUND,
            ApiGatewayError::ConflictException(_) => StatusCode::CONFLICT,
            ApiGatewayError::ValidationException(_) => StatusCode::BAD_REQUEST,
            ApiGatewayError::AccessDeniedException(_) => StatusCode::FORBIDDEN,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiGatewayError::BadRequestException(m)
            | ApiGatewayError::NotFoundException(m)
            | ApiGatewayError::ConflictException(m)
            | ApiGatewayError::ValidationException(m)
            | ApiGatewayError::AccessDeniedException(m) => m,
        }
    }
}

impl IntoResponse for ApiGatewayError {
    fn into_response(self) -> Response {
        let body = json!({
            "message": self.message(),
        });
        (
            self.status_code(),
            [("x-amzn-ErrorType", self.error_type())],
            axum::Json(body),
        )
            .into_response()
    }
}
