//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CreateProduct, PagedResponse, ProductQueryParams, ProductResponse, UpdateProduct,
};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Owns pagination arithmetic and the mapping between DTOs and stored
/// products. Absence is a normal outcome here (`Option` / `bool`); repository
/// failures propagate unchanged.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Filtered, paginated listing ordered by ascending id
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        params: ProductQueryParams,
    ) -> ProductResult<PagedResponse<ProductResponse>> {
        let (page, page_size, offset) = page_window(params.page, params.page_size)?;
        let filter = params.filter();

        let total_records = self.repository.count(&filter).await?;
        let products = self
            .repository
            .find_page(&filter, offset, page_size)
            .await?;

        let data = products.into_iter().map(ProductResponse::from).collect();
        Ok(PagedResponse::new(data, page, page_size, total_records))
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Option<ProductResponse>> {
        let product = self.repository.get_by_id(id).await?;
        Ok(product.map(ProductResponse::from))
    }

    /// Create a new product and return it with its assigned id
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<ProductResponse> {
        let product = self.repository.add(input).await?;
        Ok(product.into())
    }

    /// Replace every mutable field; `false` when the product does not exist
    #[instrument(skip(self, input), fields(product_id = input.id))]
    pub async fn update_product(&self, input: UpdateProduct) -> ProductResult<bool> {
        let Some(mut product) = self.repository.get_by_id(input.id).await? else {
            return Ok(false);
        };

        input.apply_to(&mut product);
        self.repository.update(product).await?;
        Ok(true)
    }

    /// `false` when the product does not exist
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<bool> {
        let Some(product) = self.repository.get_by_id(id).await? else {
            return Ok(false);
        };

        self.repository.delete(product).await?;
        Ok(true)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Returns `(page, page_size, offset)` or rejects the request.
fn page_window(page: i64, page_size: i64) -> ProductResult<(u64, u64, u64)> {
    if page < 1 {
        return Err(ProductError::InvalidPagination(
            "page must be greater than or equal to 1".to_string(),
        ));
    }
    if page_size < 1 {
        return Err(ProductError::InvalidPagination(
            "pageSize must be greater than or equal to 1".to_string(),
        ));
    }

    // Both are positive here, so the casts are lossless.
    let (page, page_size) = (page as u64, page_size as u64);
    let offset = (page - 1).checked_mul(page_size).ok_or_else(|| {
        ProductError::InvalidPagination("page is out of range for the given pageSize".to_string())
    })?;

    Ok((page, page_size, offset))
}
