//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_markets;
mod m20240101_000002_create_sellers;
mod m20240101_000003_create_seller_markets;
mod m20240101_000004_create_products;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_markets::Migration),
            Box::new(m20240101_000002_create_sellers::Migration),
            Box::new(m20240101_000003_create_seller_markets::Migration),
            Box::new(m20240101_000004_create_products::Migration),
        ]
    }
}
