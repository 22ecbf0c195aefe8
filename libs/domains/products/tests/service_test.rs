//! Service and controller behaviour against real repositories.

use async_trait::async_trait;
use axum::http::StatusCode;
use domain_products::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn create(name: &str, price: &str, stock: i32) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        description: format!("{name} description"),
        price: Decimal::from_str(price).unwrap(),
        stock,
    }
}

#[tokio::test]
async fn test_create_then_get_returns_same_fields() {
    let service = ProductService::new(InMemoryProductRepository::new());

    let created = service
        .create_product(create("Laptop", "1299.99", 5))
        .await
        .unwrap();
    let fetched = service.get_product(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.price, Decimal::from_str("1299.99").unwrap());

    // Reads are stable
    let again = service.get_product(created.id).await.unwrap().unwrap();
    assert_eq!(again, fetched);
}

#[tokio::test]
async fn test_second_page_of_twenty_five() {
    let service = ProductService::new(InMemoryProductRepository::new());
    for i in 1..=25 {
        service
            .create_product(create(&format!("Item {i}"), "5.00", 1))
            .await
            .unwrap();
    }

    let page = service
        .list_products(ProductQueryParams {
            page: 2,
            page_size: 10,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.data.len(), 10);
    assert_eq!(page.total_records, 25);
    assert_eq!(page.total_pages, 3);
    let ids: Vec<i64> = page.data.iter().map(|p| p.id).collect();
    assert_eq!(ids, (11..=20).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_name_filter_selects_single_record() {
    let service = ProductService::new(InMemoryProductRepository::new());
    service
        .create_product(create("Laptop", "1299.99", 5))
        .await
        .unwrap();
    service
        .create_product(create("Teclado", "49.90", 20))
        .await
        .unwrap();

    let page = service
        .list_products(ProductQueryParams {
            name: Some("Laptop".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.total_records, 1);
    assert_eq!(page.data[0].name, "Laptop");
}

#[tokio::test]
async fn test_update_reflects_every_field() {
    let service = ProductService::new(InMemoryProductRepository::new());
    let created = service
        .create_product(create("Laptop", "1299.99", 5))
        .await
        .unwrap();

    let updated = service
        .update_product(UpdateProduct {
            id: created.id,
            name: "Laptop Air".to_string(),
            description: "13 inch".to_string(),
            price: Decimal::from_str("999.00").unwrap(),
            stock: 12,
        })
        .await
        .unwrap();
    assert!(updated);

    let fetched = service.get_product(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Laptop Air");
    assert_eq!(fetched.description, "13 inch");
    assert_eq!(fetched.price, Decimal::from_str("999.00").unwrap());
    assert_eq!(fetched.stock, 12);
}

#[tokio::test]
async fn test_missing_ids_report_false() {
    let service = ProductService::new(InMemoryProductRepository::new());

    assert!(!service.delete_product(1).await.unwrap());
    assert!(
        !service
            .update_product(UpdateProduct {
                id: 1,
                name: "Ghost".to_string(),
                description: "Ghost".to_string(),
                price: Decimal::ONE,
                stock: 1,
            })
            .await
            .unwrap()
    );
}

/// Repository whose backing store is unreachable.
struct UnavailableRepository;

#[async_trait]
impl ProductRepository for UnavailableRepository {
    async fn count(&self, _: &ProductFilter) -> ProductResult<u64> {
        Err(ProductError::Database("connection refused".to_string()))
    }

    async fn find_page(&self, _: &ProductFilter, _: u64, _: u64) -> ProductResult<Vec<Product>> {
        Err(ProductError::Database("connection refused".to_string()))
    }

    async fn get_by_id(&self, _: i64) -> ProductResult<Option<Product>> {
        Err(ProductError::Database("connection refused".to_string()))
    }

    async fn add(&self, _: CreateProduct) -> ProductResult<Product> {
        Err(ProductError::Database("connection refused".to_string()))
    }

    async fn update(&self, _: Product) -> ProductResult<()> {
        Err(ProductError::Database("connection refused".to_string()))
    }

    async fn delete(&self, _: Product) -> ProductResult<()> {
        Err(ProductError::Database("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_infrastructure_failures_become_500_envelopes() {
    let controller = ProductController::new(ProductService::new(UnavailableRepository));

    let get = controller.get(1).await;
    assert_eq!(get.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(get.body.error);
    assert_eq!(
        get.body.message,
        "Failed to get product: Database error: connection refused"
    );

    let created = controller.create(create("Laptop", "1299.99", 5)).await;
    assert_eq!(created.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(created.body.message.starts_with("Failed to create product"));

    let deleted = controller.delete(1).await;
    assert_eq!(deleted.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_invalid_input_never_reaches_failing_repository() {
    let controller = ProductController::new(ProductService::new(UnavailableRepository));

    let reply = controller.create(create("", "1.00", 1)).await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body.message, "Validation failed");
}
