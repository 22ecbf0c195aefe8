pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use crate::envelope::{ApiReply, ApiResponse};
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error type rendered as a Fail envelope.
///
/// Domain crates convert their own errors into this type; each variant knows
/// its HTTP status and [`ErrorCode`], and is logged once when rendered.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Path extraction error: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<String>,
    },

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Request timed out")]
    RequestTimeout,

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::JsonExtractorRejection(_) => ErrorCode::JsonExtraction,
            AppError::QueryExtractorRejection(_) => ErrorCode::QueryExtraction,
            AppError::PathExtractorRejection(_) | AppError::InvalidId(_) => ErrorCode::InvalidId,
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::MethodNotAllowed => ErrorCode::MethodNotAllowed,
            AppError::RequestTimeout => ErrorCode::RequestTimeout,
            AppError::Database(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_)
            | AppError::QueryExtractorRejection(_)
            | AppError::PathExtractorRejection(_)
            | AppError::InvalidId(_)
            | AppError::Validation { .. }
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs the failure and converts it into a Fail envelope with its status.
    pub fn into_reply<T>(self) -> ApiReply<T> {
        let code = self.error_code();
        let status = self.status();

        if code.is_server_error() {
            tracing::error!(error_code = code.code(), error = %self, "Request failed");
        } else {
            tracing::warn!(error_code = code.code(), error = %self, "Request rejected");
        }

        let body = match self {
            AppError::JsonExtractorRejection(e) => ApiResponse::fail(e.body_text()),
            AppError::QueryExtractorRejection(e) => ApiResponse::fail(e.body_text()),
            AppError::PathExtractorRejection(e) => ApiResponse::fail(e.body_text()),
            AppError::InvalidId(raw) => ApiResponse::fail(format!("Invalid id: {raw}")),
            AppError::Validation { message, errors } => {
                ApiResponse::fail_with_errors(message, errors)
            }
            AppError::BadRequest(msg) | AppError::NotFound(msg) => ApiResponse::fail(msg),
            err @ (AppError::MethodNotAllowed
            | AppError::RequestTimeout
            | AppError::Database(_)) => ApiResponse::fail(err.to_string()),
        };

        ApiReply::new(status, body)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_reply::<()>().into_response()
    }
}
