use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, sea_query::LikeExpr,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product, ProductFilter},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository
///
/// Text filters compile to `LIKE '%x%' ESCAPE '\'`, so they are case-sensitive
/// and `%` or `_` in the filter value match literally.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn filtered(filter: &ProductFilter) -> Select<entity::Entity> {
        let mut query = entity::Entity::find();

        if let Some(name) = &filter.name {
            query = query.filter(entity::Column::Name.like(substring(name)));
        }

        if let Some(description) = &filter.description {
            query = query.filter(entity::Column::Description.like(substring(description)));
        }

        if let Some(price) = filter.price {
            query = query.filter(entity::Column::Price.eq(price));
        }

        if let Some(stock) = filter.stock {
            query = query.filter(entity::Column::Stock.eq(stock));
        }

        query
    }
}

/// `%value%` with the LIKE wildcards in `value` escaped.
fn substring(value: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn count(&self, filter: &ProductFilter) -> ProductResult<u64> {
        Ok(Self::filtered(filter).count(&self.db).await?)
    }

    async fn find_page(
        &self,
        filter: &ProductFilter,
        offset: u64,
        limit: u64,
    ) -> ProductResult<Vec<Product>> {
        let models = Self::filtered(filter)
            .order_by_asc(entity::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn add(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, product: Product) -> ProductResult<()> {
        let id = product.id;
        let active_model: entity::ActiveModel = product.into();

        match active_model.update(&self.db).await {
            Ok(_) => {
                tracing::info!(product_id = id, "Updated product");
                Ok(())
            }
            Err(DbErr::RecordNotUpdated) => Err(ProductError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, product: Product) -> ProductResult<()> {
        let id = product.id;
        let model = entity::Model {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
        };

        let result = model.delete(&self.db).await?;
        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(())
    }
}
