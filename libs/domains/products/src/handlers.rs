//! HTTP handlers for Products API

use axum::{Router, extract::State, routing::get};
use axum_helpers::{
    ApiReply, ApiResponse, EnvelopeJson, EnvelopeQuery, IdPath,
    errors::{
        handlers::method_not_allowed,
        responses::{
            BadRequestResponse, BadRequestValidationResponse, InternalServerErrorResponse,
            MessageResponse, NotFoundResponse,
        },
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::controller::ProductController;
use crate::models::{
    CreateProduct, PagedResponse, ProductQueryParams, ProductResponse, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(ProductResponse, CreateProduct, UpdateProduct),
        responses(
            MessageResponse,
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

type SharedController<R> = Arc<ProductController<R>>;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let controller = Arc::new(ProductController::new(service));

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(controller)
}

/// List products with optional filters and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQueryParams),
    responses(
        (status = 200, description = "One page of products", body = ApiResponse<PagedResponse<ProductResponse>>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(controller): State<SharedController<R>>,
    EnvelopeQuery(params): EnvelopeQuery<ProductQueryParams>,
) -> ApiReply<PagedResponse<ProductResponse>> {
    controller.list(params).await
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(controller): State<SharedController<R>>,
    EnvelopeJson(input): EnvelopeJson<CreateProduct>,
) -> ApiReply<ProductResponse> {
    controller.create(input).await
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(controller): State<SharedController<R>>,
    IdPath(id): IdPath,
) -> ApiReply<ProductResponse> {
    controller.get(id).await
}

/// Replace every field of a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID, must equal the body id")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, response = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(controller): State<SharedController<R>>,
    IdPath(id): IdPath,
    EnvelopeJson(input): EnvelopeJson<UpdateProduct>,
) -> ApiReply<()> {
    controller.update(id, input).await
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, response = MessageResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(controller): State<SharedController<R>>,
    IdPath(id): IdPath,
) -> ApiReply<()> {
    controller.delete(id).await
}
