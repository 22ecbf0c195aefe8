//! Uniform response envelope.
//!
//! Every endpoint answers with the same JSON shape, success or failure:
//!
//! ```json
//! { "error": false, "message": "Product created", "data": { "id": 1 } }
//! { "error": true, "message": "Validation failed", "errors": ["Name is required"] }
//! ```
//!
//! `data` and `errors` are left out of the payload when absent.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire body shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request failed
    pub error: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Per-field failure messages, only on validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            error: false,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            error: false,
            message: message.into(),
            data: None,
            errors: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            data: None,
            errors: None,
        }
    }

    pub fn fail_with_errors(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            data: None,
            errors: Some(errors),
        }
    }
}

/// Envelope paired with the HTTP status it is sent with.
///
/// Controllers return this so status/body mapping can be asserted without a
/// running server; axum turns it into a JSON response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply<T> {
    pub status: StatusCode,
    pub body: ApiResponse<T>,
}

impl<T> ApiReply<T> {
    pub fn new(status: StatusCode, body: ApiResponse<T>) -> Self {
        Self { status, body }
    }

    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, ApiResponse::success(message, data))
    }

    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, ApiResponse::success_empty(message))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiResponse::fail(message))
    }
}

impl<T: Serialize> IntoResponse for ApiReply<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_omits_errors() {
        let body = ApiResponse::success("Product created", json!({ "id": 1 }));
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(
            value,
            json!({ "error": false, "message": "Product created", "data": { "id": 1 } })
        );
    }

    #[test]
    fn test_success_empty_omits_data() {
        let body = ApiResponse::<()>::success_empty("Product deleted");
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value, json!({ "error": false, "message": "Product deleted" }));
    }

    #[test]
    fn test_fail_with_errors_shape() {
        let body = ApiResponse::<()>::fail_with_errors(
            "Validation failed",
            vec!["Name is required".to_string()],
        );
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(
            value,
            json!({
                "error": true,
                "message": "Validation failed",
                "errors": ["Name is required"]
            })
        );
    }

    #[test]
    fn test_reply_statuses() {
        assert_eq!(ApiReply::ok("ok", 1).status, StatusCode::OK);
        assert!(!ApiReply::<()>::ok_empty("done").body.error);

        let missing = ApiReply::<()>::not_found("missing");
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert!(missing.body.error);
    }

    #[test]
    fn test_reply_into_response_keeps_status() {
        let response = ApiReply::<()>::not_found("Product not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
