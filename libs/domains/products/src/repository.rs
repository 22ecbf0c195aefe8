use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter};

/// Repository trait for Product persistence
///
/// Listing is split into `count` and `find_page` so any store that can filter,
/// count and slice can back the service. Pages are ordered by ascending id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Number of products matching `filter`
    async fn count(&self, filter: &ProductFilter) -> ProductResult<u64>;

    /// Products matching `filter`, ascending id, `limit` rows after skipping `offset`
    async fn find_page(
        &self,
        filter: &ProductFilter,
        offset: u64,
        limit: u64,
    ) -> ProductResult<Vec<Product>>;

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Persist a new product and return it with its assigned id
    async fn add(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Replace the stored product with the same id
    async fn update(&self, product: Product) -> ProductResult<()>;

    async fn delete(&self, product: Product) -> ProductResult<()>;
}

#[derive(Debug)]
struct Store {
    products: BTreeMap<i64, Product>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of ProductRepository
///
/// Ids start at 1 and are never reused. Clones share the same store.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn count(&self, filter: &ProductFilter) -> ProductResult<u64> {
        let store = self.store.read().await;
        Ok(store.products.values().filter(|p| filter.matches(p)).count() as u64)
    }

    async fn find_page(
        &self,
        filter: &ProductFilter,
        offset: u64,
        limit: u64,
    ) -> ProductResult<Vec<Product>> {
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);

        let store = self.store.read().await;
        Ok(store
            .products
            .values()
            .filter(|p| filter.matches(p))
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn add(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let product = Product {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
        };
        store.products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<()> {
        let mut store = self.store.write().await;

        let id = product.id;
        match store.products.get_mut(&id) {
            Some(existing) => *existing = product,
            None => return Err(ProductError::NotFound(id)),
        }

        tracing::info!(product_id = id, "Updated product");
        Ok(())
    }

    async fn delete(&self, product: Product) -> ProductResult<()> {
        let mut store = self.store.write().await;

        if store.products.remove(&product.id).is_some() {
            tracing::info!(product_id = product.id, "Deleted product");
        }
        Ok(())
    }
}
