//! Shared fixtures for the integration tests: a migrated in-memory SQLite
//! database, the router on top of it and a small request helper.

#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;

use market_api::domain::{
    Amount, DeletePolicy, Market, NewMarket, NewProduct, NewSeller, Product, RepositoryProvider, Seller,
};
use market_api::infrastructure::database::migrator::Migrator;
use market_api::{create_api_router, init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub async fn setup_db() -> DatabaseConnection {
    let db = init_database(&DatabaseConfig::in_memory())
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub async fn setup_repos() -> (DatabaseConnection, Arc<dyn RepositoryProvider>) {
    let db = setup_db().await;
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    (db, repos)
}

pub async fn setup_app(policy: DeletePolicy) -> Router {
    let (db, repos) = setup_repos().await;
    create_api_router(repos, db, policy, None)
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn amount(s: &str) -> Amount {
    Amount::new(s)
}

pub fn new_market(name: &str) -> NewMarket {
    NewMarket {
        name: name.to_string(),
        location: "Main Street".to_string(),
        description: format!("{} description", name),
        net_worth: dec("10.00"),
    }
}

pub async fn create_market(repos: &Arc<dyn RepositoryProvider>, name: &str) -> Market {
    repos.markets().create(new_market(name)).await.unwrap()
}

pub async fn create_seller(
    repos: &Arc<dyn RepositoryProvider>,
    name: &str,
    market_ids: Vec<i32>,
) -> Seller {
    repos
        .sellers()
        .create(NewSeller {
            name: name.to_string(),
            contact_info: format!("{}@example.com", name.to_lowercase()),
            market_ids,
        })
        .await
        .unwrap()
}

pub async fn create_product(
    repos: &Arc<dyn RepositoryProvider>,
    name: &str,
    market_id: i32,
    seller_id: i32,
) -> Product {
    repos
        .products()
        .create(NewProduct {
            name: name.to_string(),
            description: "fresh".to_string(),
            price: dec("4.99"),
            market_id,
            seller_id,
        })
        .await
        .unwrap()
}

/// Send a request through the router and decode the JSON response body
/// (`Value::Null` when the body is empty or not JSON).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
