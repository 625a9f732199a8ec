//! `GET /metrics`
//!
//! Besides the request metrics recorded by the middleware, every scrape
//! refreshes the `marketplace_entities` gauge (label `entity`) from the
//! database.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::infrastructure::catalog_counts;

#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
    pub db: DatabaseConnection,
}

pub async fn prometheus_metrics(State(state): State<MetricsState>) -> impl IntoResponse {
    match catalog_counts(&state.db).await {
        Ok(counts) => {
            metrics::gauge!("marketplace_entities", "entity" => "market").set(counts.markets as f64);
            metrics::gauge!("marketplace_entities", "entity" => "seller").set(counts.sellers as f64);
            metrics::gauge!("marketplace_entities", "entity" => "product")
                .set(counts.products as f64);
        }
        // Keep serving the last known values
        Err(e) => warn!(error = %e, "Could not refresh entity gauges"),
    }

    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        state.handle.render(),
    )
}
