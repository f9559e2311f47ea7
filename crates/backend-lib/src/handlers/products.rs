// ============================
// catalog-backend/src/handlers/products.rs
// ============================
//! Product CRUD endpoints.
//!
//! Role requirements live in the access policy table, not here; handlers
//! only assume an authenticated caller.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use metrics::counter;
use tracing::info;

use catalog_common::{ProductRequest, ProductResponse};

use crate::auth::middleware::CurrentUser;
use crate::error::AppError;
use crate::metrics::{PRODUCT_CREATED, PRODUCT_DELETED};
use crate::store::{Product, ProductFields};
use crate::validation;
use crate::AppState;

fn to_fields(request: ProductRequest) -> ProductFields {
    ProductFields {
        name: request.name,
        description: request.description,
        price: request.price,
        quantity: request.quantity.unwrap_or(0),
        category: request.category,
    }
}

fn to_response(product: Product) -> ProductResponse {
    ProductResponse {
        id: product.id,
        name: product.name,
        description: product.description,
        price: product.price,
        quantity: product.quantity,
        category: product.category,
        created_at: product.created_at,
        updated_at: product.updated_at,
    }
}

/// `POST /api/products`
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Json(request): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    validation::validate_product(&request)?;
    let product = state.products.create(to_fields(request)).await?;
    counter!(PRODUCT_CREATED).increment(1);
    info!(event = "product.created", id = product.id, by = %caller.username, "product created");
    Ok((StatusCode::CREATED, Json(to_response(product))))
}

/// `GET /api/products`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.products.list().await?;
    Ok(Json(products.into_iter().map(to_response).collect()))
}

/// `GET /api/products/{id}`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.products.get(id).await?.ok_or(AppError::ProductNotFound)?;
    Ok(Json(to_response(product)))
}

/// `PUT /api/products/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    validation::validate_product(&request)?;
    let product = state.products.update(id, to_fields(request)).await?;
    Ok(Json(to_response(product)))
}

/// `DELETE /api/products/{id}`
pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.products.delete(id).await?;
    counter!(PRODUCT_DELETED).increment(1);
    info!(event = "product.deleted", id, by = %caller.username, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
