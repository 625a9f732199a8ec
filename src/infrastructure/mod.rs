//! Infrastructure layer - external concerns

pub mod database;

pub use database::{
    catalog_counts, init_database, CatalogCounts, DatabaseConfig, SeaOrmRepositoryProvider,
};
