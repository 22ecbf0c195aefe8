//! Reusable OpenAPI response types for the Fail envelope.

use serde::Serialize;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::{ToResponse, ToSchema};

/// Documentation shape of a failed request.
#[derive(Serialize, ToSchema)]
pub struct FailBody {
    /// Always `true`
    pub error: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Documentation shape of a successful request that carries no data.
#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    /// Always `false`
    pub error: bool,
    pub message: String,
}

#[derive(ToResponse)]
#[response(
    description = "Operation completed",
    content_type = "application/json",
    example = json!({ "error": false, "message": "Product updated" })
)]
pub struct MessageResponse(pub MessageBody);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - validation failed",
    content_type = "application/json",
    example = json!({
        "error": true,
        "message": "Validation failed",
        "errors": ["Name is required", "Price must be greater than zero"]
    })
)]
pub struct BadRequestValidationResponse(pub FailBody);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed id, body or query",
    content_type = "application/json",
    example = json!({ "error": true, "message": "Invalid id: abc" })
)]
pub struct BadRequestResponse(pub FailBody);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "error": true, "message": "Product not found" })
)]
pub struct NotFoundResponse(pub FailBody);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "error": true, "message": "Database error: connection refused" })
)]
pub struct InternalServerErrorResponse(pub FailBody);
