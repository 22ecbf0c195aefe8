use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::validation::FieldViolation;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("Product ID mismatch: path id {path} does not match body id {body}")]
    IdMismatch { path: i64, body: i64 },

    #[error("{0}")]
    InvalidPagination(String),

    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(String),
}

impl ProductError {
    /// Infrastructure failures, as opposed to problems with the request.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ProductError::Database(_))
    }
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(violations) => AppError::Validation {
                message: "Validation failed".to_string(),
                errors: violations.into_iter().map(|v| v.message).collect(),
            },
            err @ ProductError::IdMismatch { .. } => AppError::BadRequest(err.to_string()),
            ProductError::InvalidPagination(msg) => AppError::BadRequest(msg),
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_validation_maps_to_bad_request_with_messages() {
        let violation = FieldViolation::new("name", "required");
        let app: AppError = ProductError::Validation(vec![violation]).into();

        assert_eq!(app.status(), StatusCode::BAD_REQUEST);
        let reply = app.into_reply::<()>();
        assert_eq!(reply.body.message, "Validation failed");
        assert_eq!(
            reply.body.errors,
            Some(vec!["Product name is required.".to_string()])
        );
    }

    #[test]
    fn test_not_found_and_validation_are_distinct() {
        let not_found: AppError = ProductError::NotFound(7).into();
        let invalid: AppError = ProductError::InvalidPagination("bad page".to_string()).into();

        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_db_errors_are_server_errors() {
        let err: ProductError = DbErr::Custom("connection refused".to_string()).into();

        assert!(err.is_server_error());
        assert!(err.to_string().contains("connection refused"));

        let app: AppError = err.into();
        assert_eq!(app.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
