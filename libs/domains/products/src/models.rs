use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::validation::{validate_not_blank, validate_price};

pub const NAME_MAX_LEN: u64 = 100;
pub const DESCRIPTION_MAX_LEN: u64 = 500;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;

/// Product entity as stored by a repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Positive, assigned by the repository, never changes
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Fixed point with two fractional digits
    #[schema(value_type = String, example = "1299.99")]
    pub price: Decimal,
    pub stock: i32,
}

/// DTO for creating a new product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 100, code = "too_long")
    )]
    pub name: String,
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 500, code = "too_long")
    )]
    pub description: String,
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "1299.99")]
    pub price: Decimal,
    #[validate(range(min = 1, code = "must_be_positive"))]
    pub stock: i32,
}

/// DTO for replacing every mutable field of an existing product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    /// Must equal the id in the request path
    pub id: i64,
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 100, code = "too_long")
    )]
    pub name: String,
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 500, code = "too_long")
    )]
    pub description: String,
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "1299.99")]
    pub price: Decimal,
    #[validate(range(min = 1, code = "must_be_positive"))]
    pub stock: i32,
}

impl UpdateProduct {
    /// Overwrites every mutable field of `product`; the id is left alone.
    pub fn apply_to(self, product: &mut Product) {
        product.name = self.name;
        product.description = self.description;
        product.price = self.price;
        product.stock = self.stock;
    }
}

/// Read-only projection returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "1299.99")]
    pub price: Decimal,
    pub stock: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
        }
    }
}

/// Query string of the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductQueryParams {
    /// Substring of the name, case-sensitive
    pub name: Option<String>,
    /// Substring of the description, case-sensitive
    pub description: Option<String>,
    /// Exact price
    #[param(value_type = Option<String>)]
    pub price: Option<Decimal>,
    /// Exact stock
    pub stock: Option<i32>,
    /// 1-based page number
    #[serde(default = "default_page")]
    #[param(default = 1, minimum = 1)]
    pub page: i64,
    #[serde(default = "default_page_size")]
    #[param(default = 10, minimum = 1)]
    pub page_size: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for ProductQueryParams {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            price: None,
            stock: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProductQueryParams {
    pub fn filter(&self) -> ProductFilter {
        ProductFilter::new(
            self.name.clone(),
            self.description.clone(),
            self.price,
            self.stock,
        )
    }
}

/// The filters a repository applies; blank text filters are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
}

impl ProductFilter {
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        price: Option<Decimal>,
        stock: Option<i32>,
    ) -> Self {
        Self {
            name: name.filter(|s| !s.trim().is_empty()),
            description: description.filter(|s| !s.trim().is_empty()),
            price,
            stock,
        }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()), None, None, None)
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.name
            .as_deref()
            .is_none_or(|name| product.name.contains(name))
            && self
                .description
                .as_deref()
                .is_none_or(|desc| product.description.contains(desc))
            && self.price.is_none_or(|price| product.price == price)
            && self.stock.is_none_or(|stock| product.stock == stock)
    }
}

/// One page of a filtered listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_records: u64,
    /// `ceil(total_records / page_size)`
    pub total_pages: u64,
}

impl<T> PagedResponse<T> {
    pub fn new(data: Vec<T>, page: u64, page_size: u64, total_records: u64) -> Self {
        Self {
            data,
            page,
            page_size,
            total_records,
            total_pages: total_records.div_ceil(page_size),
        }
    }
}
