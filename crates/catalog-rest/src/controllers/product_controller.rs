//! Product catalog controller.

use crate::{
    extractors::ValidatedJson,
    responses::{
        created, ok, ApiResponse, ApiResult, AppError, RequestTimer, TimedResultExt, MSG_DELETED,
        MSG_SUCCESS, MSG_UPDATED,
    },
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use catalog_core::{CatalogError, Product, ProductId};
use catalog_service::ProductRequest;
use tracing::debug;

/// Payload returned by a successful delete.
pub const DELETED: &str = "Deleted";

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Parses a product id from a path or query value.
pub(crate) fn parse_product_id(raw: &str, timer: &RequestTimer) -> Result<ProductId, AppError> {
    ProductId::parse(raw).map_err(|_| {
        AppError::new(
            CatalogError::validation(format!("Invalid product ID: {}", raw)),
            timer,
        )
    })
}

/// List all products.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "All products", body = ApiResponse<Vec<Product>>),
        (status = 500, description = "Database failure", body = ApiResponse<String>)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    let timer = RequestTimer::start();
    debug!("List products request");

    let products = state.product_service.list_products().await.timed(&timer)?;
    ok(products, MSG_SUCCESS, &timer)
}

/// Get a product by ID.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "The product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found", body = ApiResponse<String>)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Product> {
    let timer = RequestTimer::start();
    debug!("Get product request: {}", id);

    let id = parse_product_id(&id, &timer)?;
    let product = state.product_service.get_product(id).await.timed(&timer)?;
    ok(product, MSG_SUCCESS, &timer)
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 400, description = "Invalid request", body = ApiResponse<String>)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), AppError> {
    let timer = RequestTimer::start();
    debug!("Create product request: {}", request.name);

    let product = state.product_service.create_product(request).await.timed(&timer)?;
    Ok(created(product, &timer))
}

/// Replace a product's fields.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 404, description = "Product not found", body = ApiResponse<String>)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> ApiResult<Product> {
    let timer = RequestTimer::start();
    debug!("Update product request: {}", id);

    let id = parse_product_id(&id, &timer)?;
    let product = state
        .product_service
        .update_product(id, request)
        .await
        .timed(&timer)?;
    ok(product, MSG_UPDATED, &timer)
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<String>),
        (status = 404, description = "Product not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<String> {
    let timer = RequestTimer::start();
    debug!("Delete product request: {}", id);

    let id = parse_product_id(&id, &timer)?;
    let deleted = state.product_service.delete_product(id).await.timed(&timer)?;
    ok(deleted.map(|()| DELETED.to_string()), MSG_DELETED, &timer)
}
