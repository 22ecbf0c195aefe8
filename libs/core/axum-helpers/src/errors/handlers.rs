use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::envelope::ApiReply;
use crate::errors::AppError;

/// Fallback for unmatched routes, answered with a Fail envelope.
pub async fn not_found() -> Response {
    ApiReply::<()>::not_found("The requested resource was not found").into_response()
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    AppError::MethodNotAllowed.into_response()
}

/// Replaces the bare 408 produced by the timeout layer with a Fail envelope.
///
/// Meant for `axum::middleware::map_response`, outside the timeout layer.
pub async fn timeout_envelope(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::RequestTimeout.into_response();
    }
    response
}
