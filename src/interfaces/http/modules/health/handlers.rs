//! Health check handler

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::infrastructure::{catalog_counts, CatalogCounts};

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

/// Service health response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub database: ComponentHealth,
    /// Stored entities; absent when the database could not be read
    pub catalog: Option<CatalogSummary>,
}

/// Component health status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealth {
    pub status: String,
    pub latency_ms: Option<u64>,
}

/// Row counts of the marketplace tables
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CatalogSummary {
    pub markets: u64,
    pub sellers: u64,
    pub products: u64,
}

impl From<CatalogCounts> for CatalogSummary {
    fn from(c: CatalogCounts) -> Self {
        Self {
            markets: c.markets,
            sellers: c.sellers,
            products: c.products,
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachable, catalog counted", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    // Counting the catalog doubles as the database ping
    let db_start = Instant::now();
    let (database, catalog) = match catalog_counts(&state.db).await {
        Ok(counts) => (
            ComponentHealth {
                status: "ok".to_string(),
                latency_ms: Some(db_start.elapsed().as_millis() as u64),
            },
            Some(CatalogSummary::from(counts)),
        ),
        Err(e) => {
            warn!(error = %e, "Health check could not read the catalog");
            (
                ComponentHealth {
                    status: "error".to_string(),
                    latency_ms: None,
                },
                None,
            )
        }
    };

    let (status, http_status) = if catalog.is_some() {
        ("ok", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    (
        http_status,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.started_at.elapsed().as_secs(),
            database,
            catalog,
        }),
    )
}
