//! Maps validator and service outcomes onto the response envelope.
//!
//! Every operation answers with an [`ApiReply`], so status and body can be
//! asserted without going through HTTP.

use axum_helpers::{ApiReply, AppError};

use crate::error::ProductError;
use crate::models::{
    CreateProduct, PagedResponse, ProductQueryParams, ProductResponse, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::{validate_create, validate_update};

const NOT_FOUND: &str = "Product not found";

pub struct ProductController<R: ProductRepository> {
    service: ProductService<R>,
}

impl<R: ProductRepository> ProductController<R> {
    pub fn new(service: ProductService<R>) -> Self {
        Self { service }
    }

    pub async fn list(
        &self,
        params: ProductQueryParams,
    ) -> ApiReply<PagedResponse<ProductResponse>> {
        match self.service.list_products(params).await {
            Ok(page) => ApiReply::ok("Products retrieved", page),
            Err(err) => failure("Failed to list products", err),
        }
    }

    pub async fn get(&self, id: i64) -> ApiReply<ProductResponse> {
        match self.service.get_product(id).await {
            Ok(Some(product)) => ApiReply::ok("Product retrieved", product),
            Ok(None) => ApiReply::not_found(NOT_FOUND),
            Err(err) => failure("Failed to get product", err),
        }
    }

    pub async fn create(&self, input: CreateProduct) -> ApiReply<ProductResponse> {
        let violations = validate_create(&input);
        if !violations.is_empty() {
            return rejected(ProductError::Validation(violations));
        }

        match self.service.create_product(input).await {
            Ok(product) => ApiReply::ok("Product created", product),
            Err(err) => failure("Failed to create product", err),
        }
    }

    /// Validation runs before the path/body id check.
    pub async fn update(&self, path_id: i64, input: UpdateProduct) -> ApiReply<()> {
        let violations = validate_update(&input);
        if !violations.is_empty() {
            return rejected(ProductError::Validation(violations));
        }

        if input.id != path_id {
            return rejected(ProductError::IdMismatch {
                path: path_id,
                body: input.id,
            });
        }

        match self.service.update_product(input).await {
            Ok(true) => ApiReply::ok_empty("Product updated"),
            Ok(false) => ApiReply::not_found(NOT_FOUND),
            Err(err) => failure("Failed to update product", err),
        }
    }

    pub async fn delete(&self, id: i64) -> ApiReply<()> {
        match self.service.delete_product(id).await {
            Ok(true) => ApiReply::ok_empty("Product deleted"),
            Ok(false) => ApiReply::not_found(NOT_FOUND),
            Err(err) => failure("Failed to delete product", err),
        }
    }
}

impl<R: ProductRepository> Clone for ProductController<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

fn rejected<T>(err: ProductError) -> ApiReply<T> {
    AppError::from(err).into_reply()
}

/// Like [`rejected`], but infrastructure failures are prefixed with `context`.
fn failure<T>(context: &str, err: ProductError) -> ApiReply<T> {
    let server_error = err.is_server_error();
    let mut reply = rejected(err);

    if server_error {
        reply.body.message = format!("{context}: {}", reply.body.message);
    }
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryProductRepository, MockProductRepository};
    use axum::http::StatusCode;
    use rust_decimal::Decimal;

    fn controller() -> ProductController<InMemoryProductRepository> {
        ProductController::new(ProductService::new(InMemoryProductRepository::new()))
    }

    fn laptop() -> CreateProduct {
        CreateProduct {
            name: "Laptop".to_string(),
            description: "Gaming laptop".to_string(),
            price: Decimal::new(129999, 2),
            stock: 5,
        }
    }

    fn update_for(id: i64) -> UpdateProduct {
        UpdateProduct {
            id,
            name: "Laptop Air".to_string(),
            description: "13 inch laptop".to_string(),
            price: Decimal::new(99900, 2),
            stock: 7,
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let controller = controller();

        let created = controller.create(laptop()).await;
        assert_eq!(created.status, StatusCode::OK);
        assert_eq!(created.body.message, "Product created");
        let id = created.body.data.as_ref().unwrap().id;

        let fetched = controller.get(id).await;
        assert_eq!(fetched.status, StatusCode::OK);
        assert_eq!(fetched.body.data, created.body.data);
    }

    #[tokio::test]
    async fn test_create_with_violations_lists_messages() {
        let reply = controller()
            .create(CreateProduct {
                name: String::new(),
                price: Decimal::from(-10),
                ..laptop()
            })
            .await;

        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.body.message, "Validation failed");
        assert_eq!(
            reply.body.errors,
            Some(vec![
                "Product name is required.".to_string(),
                "Product price must be greater than zero.".to_string(),
            ])
        );
    }

    #[tokio::test]
    async fn test_create_invalid_never_reaches_repository() {
        let mut repo = MockProductRepository::new();
        repo.expect_add().never();
        let controller = ProductController::new(ProductService::new(repo));

        let reply = controller
            .create(CreateProduct {
                stock: 0,
                ..laptop()
            })
            .await;

        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_validates_before_id_check() {
        let reply = controller()
            .update(
                1,
                UpdateProduct {
                    name: String::new(),
                    ..update_for(2)
                },
            )
            .await;

        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.body.message, "Validation failed");
    }

    #[tokio::test]
    async fn test_update_id_mismatch_never_reaches_repository() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().never();
        repo.expect_update().never();
        let controller = ProductController::new(ProductService::new(repo));

        let reply = controller.update(1, update_for(2)).await;

        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert!(reply.body.message.contains("mismatch"));
        assert!(reply.body.errors.is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_not_found() {
        let controller = controller();

        let updated = controller.update(9, update_for(9)).await;
        let deleted = controller.delete(9).await;

        assert_eq!(updated.status, StatusCode::NOT_FOUND);
        assert_eq!(updated.body.message, "Product not found");
        assert_eq!(deleted.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_then_delete() {
        let controller = controller();
        let id = controller.create(laptop()).await.body.data.unwrap().id;

        let updated = controller.update(id, update_for(id)).await;
        assert_eq!(updated.status, StatusCode::OK);
        assert_eq!(updated.body.message, "Product updated");
        assert!(updated.body.data.is_none());

        let fetched = controller.get(id).await.body.data.unwrap();
        assert_eq!(fetched.name, "Laptop Air");
        assert_eq!(fetched.stock, 7);

        assert_eq!(controller.delete(id).await.body.message, "Product deleted");
        assert_eq!(controller.get(id).await.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_pagination_is_bad_request() {
        let reply = controller()
            .list(ProductQueryParams {
                page: 0,
                ..Default::default()
            })
            .await;

        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert!(reply.body.message.contains("page"));
    }

    #[tokio::test]
    async fn test_infrastructure_failure_is_prefixed_500() {
        let mut repo = MockProductRepository::new();
        repo.expect_count()
            .returning(|_| Err(ProductError::Database("connection refused".to_string())));
        let controller = ProductController::new(ProductService::new(repo));

        let reply = controller.list(ProductQueryParams::default()).await;

        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            reply.body.message,
            "Failed to list products: Database error: connection refused"
        );
    }
}
