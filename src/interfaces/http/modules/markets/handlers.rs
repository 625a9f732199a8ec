//! Market REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{MarketRequest, MarketResponse};
use crate::application::MarketService;
use crate::interfaces::http::common::{ApiResult, ErrorDetail, JsonBody};

#[utoipa::path(
    get,
    path = "/market/",
    tag = "Markets",
    responses(
        (status = 200, description = "Market list", body = Vec<MarketResponse>)
    )
)]
pub async fn list_markets(
    State(service): State<Arc<MarketService>>,
) -> ApiResult<Json<Vec<MarketResponse>>> {
    let markets = service.list().await?;
    Ok(Json(markets.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/market/",
    tag = "Markets",
    request_body = MarketRequest,
    responses(
        (status = 201, description = "Created", body = MarketResponse),
        (status = 400, description = "Field name to list of violations")
    )
)]
pub async fn create_market(
    State(service): State<Arc<MarketService>>,
    JsonBody(req): JsonBody<MarketRequest>,
) -> ApiResult<(StatusCode, Json<MarketResponse>)> {
    let market = service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(market.into())))
}

#[utoipa::path(
    get,
    path = "/market/{id}/",
    tag = "Markets",
    params(("id" = i32, Path, description = "Market ID")),
    responses(
        (status = 200, description = "Market details", body = MarketResponse),
        (status = 404, description = "Not found", body = ErrorDetail)
    )
)]
pub async fn get_market(
    State(service): State<Arc<MarketService>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MarketResponse>> {
    Ok(Json(service.get(id).await?.into()))
}

#[utoipa::path(
    put,
    path = "/market/{id}/",
    tag = "Markets",
    params(("id" = i32, Path, description = "Market ID")),
    request_body = MarketRequest,
    responses(
        (status = 200, description = "Updated", body = MarketResponse),
        (status = 400, description = "Field name to list of violations"),
        (status = 404, description = "Not found", body = ErrorDetail)
    )
)]
pub async fn update_market(
    State(service): State<Arc<MarketService>>,
    Path(id): Path<i32>,
    JsonBody(req): JsonBody<MarketRequest>,
) -> ApiResult<Json<MarketResponse>> {
    Ok(Json(service.update(id, req.into()).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/market/{id}/",
    tag = "Markets",
    params(("id" = i32, Path, description = "Market ID")),
    responses(
        (status = 200, description = "Deleted market", body = MarketResponse),
        (status = 404, description = "Not found", body = ErrorDetail),
        (status = 409, description = "Products still reference the market", body = ErrorDetail)
    )
)]
pub async fn delete_market(
    State(service): State<Arc<MarketService>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MarketResponse>> {
    Ok(Json(service.delete(id).await?.into()))
}
