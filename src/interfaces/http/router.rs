//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{MarketService, ProductService, SellerService};
use crate::domain::{DeletePolicy, RepositoryProvider};

use super::common::ErrorDetail;
use super::modules::{health, markets, metrics, products, request_id, sellers};

/// State shared by the resource routes.
/// Each handler extracts only the service it needs via `FromRef`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub markets: Arc<MarketService>,
    pub sellers: Arc<SellerService>,
    pub products: Arc<ProductService>,
}

impl AppState {
    pub fn new(repos: Arc<dyn RepositoryProvider>, delete_policy: DeletePolicy) -> Self {
        Self {
            markets: Arc::new(MarketService::new(repos.clone(), delete_policy)),
            sellers: Arc::new(SellerService::new(repos.clone(), delete_policy)),
            products: Arc::new(ProductService::new(repos)),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Markets
        markets::list_markets,
        markets::create_market,
        markets::get_market,
        markets::update_market,
        markets::delete_market,
        sellers::list_market_sellers,
        sellers::create_market_seller,
        // Sellers
        sellers::list_sellers,
        sellers::create_seller,
        sellers::get_seller,
        sellers::update_seller,
        sellers::delete_seller,
        // Products
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
    ),
    components(
        schemas(
            ErrorDetail,
            health::HealthResponse,
            health::ComponentHealth,
            health::CatalogSummary,
            markets::MarketRequest,
            markets::MarketResponse,
            sellers::SellerRequest,
            sellers::SellerResponse,
            sellers::SellerDetailResponse,
            products::ProductRequest,
            products::ProductResponse,
            products::ProductDetailResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Markets", description = "Markets and the sellers trading in them"),
        (name = "Sellers", description = "Sellers and their market associations"),
        (name = "Products", description = "Products offered by a seller in a market"),
    ),
    info(
        title = "Market Service API",
        version = "1.0.0",
        description = "REST API for markets, sellers and products",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Register `path` both without and with a trailing slash.
fn route_both<S>(router: Router<S>, path: &str, method_router: MethodRouter<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let bare = path.trim_end_matches('/');
    router
        .route(bare, method_router.clone())
        .route(&format!("{}/", bare), method_router)
}

/// Create the API router with all routes.
///
/// `/metrics` and the request metrics middleware are only mounted when a
/// Prometheus handle is supplied.
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    delete_policy: DeletePolicy,
    prometheus: Option<PrometheusHandle>,
) -> Router {
    let state = AppState::new(repos, delete_policy);

    // ── Resource routes ────────────────────────────────────────
    let mut api = Router::new();
    api = route_both(
        api,
        "/market/",
        get(markets::list_markets).post(markets::create_market),
    );
    api = route_both(
        api,
        "/market/{id}/",
        get(markets::get_market)
            .put(markets::update_market)
            .delete(markets::delete_market),
    );
    api = route_both(
        api,
        "/market/{id}/sellers/",
        get(sellers::list_market_sellers).post(sellers::create_market_seller),
    );
    api = route_both(
        api,
        "/sellers/",
        get(sellers::list_sellers).post(sellers::create_seller),
    );
    api = route_both(
        api,
        "/sellers/{id}/",
        get(sellers::get_seller)
            .put(sellers::update_seller)
            .delete(sellers::delete_seller),
    );
    api = route_both(
        api,
        "/products/",
        get(products::list_products).post(products::create_product),
    );
    api = route_both(
        api,
        "/products/{id}/",
        get(products::get_product)
            .put(products::update_product)
            .delete(products::delete_product),
    );
    let api = api.with_state(state);

    // ── Health ─────────────────────────────────────────────────
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db: db.clone(),
            started_at: Arc::new(Instant::now()),
        });

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(api);

    if let Some(handle) = prometheus {
        let metrics_routes = Router::new()
            .route("/metrics", get(metrics::prometheus_metrics))
            .with_state(metrics::MetricsState { handle, db });
        router = router
            .merge(metrics_routes)
            .layer(middleware::from_fn(metrics::http_metrics_middleware));
    }

    router
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_resource_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/market/",
            "/market/{id}/",
            "/market/{id}/sellers/",
            "/sellers/",
            "/sellers/{id}/",
            "/products/",
            "/products/{id}/",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
