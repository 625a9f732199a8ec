//! Seller REST API handlers, including the routes nested under a market

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{SellerDetailResponse, SellerRequest};
use crate::application::SellerService;
use crate::interfaces::http::common::{ApiResult, ErrorDetail, JsonBody};

#[utoipa::path(
    get,
    path = "/sellers/",
    tag = "Sellers",
    responses(
        (status = 200, description = "Seller list", body = Vec<SellerDetailResponse>)
    )
)]
pub async fn list_sellers(
    State(service): State<Arc<SellerService>>,
) -> ApiResult<Json<Vec<SellerDetailResponse>>> {
    let sellers = service.list().await?;
    Ok(Json(sellers.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/sellers/",
    tag = "Sellers",
    request_body = SellerRequest,
    responses(
        (status = 201, description = "Created", body = SellerDetailResponse),
        (status = 400, description = "Field name to list of violations")
    )
)]
pub async fn create_seller(
    State(service): State<Arc<SellerService>>,
    JsonBody(req): JsonBody<SellerRequest>,
) -> ApiResult<(StatusCode, Json<SellerDetailResponse>)> {
    let seller = service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(seller.into())))
}

#[utoipa::path(
    get,
    path = "/sellers/{id}/",
    tag = "Sellers",
    params(("id" = i32, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "Seller with nested markets", body = SellerDetailResponse),
        (status = 404, description = "Not found", body = ErrorDetail)
    )
)]
pub async fn get_seller(
    State(service): State<Arc<SellerService>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<SellerDetailResponse>> {
    Ok(Json(service.get(id).await?.into()))
}

#[utoipa::path(
    put,
    path = "/sellers/{id}/",
    tag = "Sellers",
    params(("id" = i32, Path, description = "Seller ID")),
    request_body = SellerRequest,
    responses(
        (status = 200, description = "Updated", body = SellerDetailResponse),
        (status = 400, description = "Field name to list of violations"),
        (status = 404, description = "Not found", body = ErrorDetail)
    )
)]
pub async fn update_seller(
    State(service): State<Arc<SellerService>>,
    Path(id): Path<i32>,
    JsonBody(req): JsonBody<SellerRequest>,
) -> ApiResult<Json<SellerDetailResponse>> {
    Ok(Json(service.update(id, req.into()).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/sellers/{id}/",
    tag = "Sellers",
    params(("id" = i32, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "Deleted seller", body = SellerDetailResponse),
        (status = 404, description = "Not found", body = ErrorDetail),
        (status = 409, description = "Products still reference the seller", body = ErrorDetail)
    )
)]
pub async fn delete_seller(
    State(service): State<Arc<SellerService>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<SellerDetailResponse>> {
    Ok(Json(service.delete(id).await?.into()))
}

// ── Nested under /market/{id}/sellers/ ─────────────────────────

#[utoipa::path(
    get,
    path = "/market/{id}/sellers/",
    tag = "Markets",
    params(("id" = i32, Path, description = "Market ID")),
    responses(
        (status = 200, description = "Sellers of the market", body = Vec<SellerDetailResponse>),
        (status = 404, description = "Market not found", body = ErrorDetail)
    )
)]
pub async fn list_market_sellers(
    State(service): State<Arc<SellerService>>,
    Path(market_id): Path<i32>,
) -> ApiResult<Json<Vec<SellerDetailResponse>>> {
    let sellers = service.list_for_market(market_id).await?;
    Ok(Json(sellers.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/market/{id}/sellers/",
    tag = "Markets",
    params(("id" = i32, Path, description = "Market ID")),
    request_body = SellerRequest,
    responses(
        (status = 201, description = "Created", body = SellerDetailResponse),
        (status = 400, description = "Field name to list of violations"),
        (status = 404, description = "Market not found", body = ErrorDetail)
    )
)]
pub async fn create_market_seller(
    State(service): State<Arc<SellerService>>,
    Path(market_id): Path<i32>,
    JsonBody(req): JsonBody<SellerRequest>,
) -> ApiResult<(StatusCode, Json<SellerDetailResponse>)> {
    let seller = service.create_for_market(market_id, req.into()).await?;
    Ok((StatusCode::CREATED, Json(seller.into())))
}
