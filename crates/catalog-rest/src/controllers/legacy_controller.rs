//! Action-style product routes kept for existing clients.
//!
//! `/api/product/{action}` with the product id in the query string. Responses
//! use the same envelope as `/api/products`; creation answers 200 rather than
//! 201.

use super::product_controller;
use crate::{
    extractors::ValidatedJson,
    responses::{ok, ApiResult, AppError, RequestTimer, TimedResultExt, MSG_CREATED},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Router,
};
use catalog_core::{CatalogError, Product};
use catalog_service::ProductRequest;
use serde::Deserialize;

/// `?id=` query parameter.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    // A missing id is rejected up front instead of being looked up as 0.
    fn require(self, timer: &RequestTimer) -> Result<String, AppError> {
        self.id
            .ok_or_else(|| AppError::new(CatalogError::validation("Missing product ID"), timer))
    }
}

/// Creates the legacy router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/GetAll", get(get_all))
        .route("/GetById", get(get_by_id))
        .route("/Create", post(create))
        .route("/Update", put(update))
        .route("/Delete", delete(remove))
}

async fn get_all(state: State<AppState>) -> ApiResult<Vec<Product>> {
    product_controller::list_products(state).await
}

async fn get_by_id(state: State<AppState>, Query(query): Query<IdQuery>) -> ApiResult<Product> {
    let id = query.require(&RequestTimer::start())?;
    product_controller::get_product(state, Path(id)).await
}

async fn create(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> ApiResult<Product> {
    let timer = RequestTimer::start();
    let product = state.product_service.create_product(request).await.timed(&timer)?;
    ok(product, MSG_CREATED, &timer)
}

async fn update(
    state: State<AppState>,
    Query(query): Query<IdQuery>,
    body: ValidatedJson<ProductRequest>,
) -> ApiResult<Product> {
    let id = query.require(&RequestTimer::start())?;
    product_controller::update_product(state, Path(id), body).await
}

async fn remove(state: State<AppState>, Query(query): Query<IdQuery>) -> ApiResult<String> {
    let id = query.require(&RequestTimer::start())?;
    product_controller::delete_product(state, Path(id)).await
}
