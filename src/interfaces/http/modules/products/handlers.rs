//! Product REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{ProductDetailResponse, ProductRequest, ProductResponse};
use crate::application::ProductService;
use crate::interfaces::http::common::{ApiResult, ErrorDetail, JsonBody};

#[utoipa::path(
    get,
    path = "/products/",
    tag = "Products",
    responses(
        (status = 200, description = "Product list", body = Vec<ProductDetailResponse>)
    )
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
) -> ApiResult<Json<Vec<ProductDetailResponse>>> {
    let products = service.list().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/products/",
    tag = "Products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Created", body = ProductResponse),
        (status = 400, description = "Field name to list of violations")
    )
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    JsonBody(req): JsonBody<ProductRequest>,
) -> ApiResult<(StatusCode, Json<ProductResponse>)> {
    let product = service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

#[utoipa::path(
    get,
    path = "/products/{id}/",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductDetailResponse),
        (status = 404, description = "Not found", body = ErrorDetail)
    )
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ProductDetailResponse>> {
    Ok(Json(service.get(id).await?.into()))
}

#[utoipa::path(
    put,
    path = "/products/{id}/",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Updated", body = ProductResponse),
        (status = 400, description = "Field name to list of violations"),
        (status = 404, description = "Not found", body = ErrorDetail)
    )
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i32>,
    JsonBody(req): JsonBody<ProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    Ok(Json(service.update(id, req.into()).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/products/{id}/",
    tag = "Products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Deleted product", body = ProductDetailResponse),
        (status = 404, description = "Not found", body = ErrorDetail)
    )
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ProductDetailResponse>> {
    Ok(Json(service.delete(id).await?.into()))
}
