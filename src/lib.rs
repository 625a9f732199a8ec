//! # Market Service
//!
//! REST API for a marketplace with markets, sellers and products.
//!
//! ## Architecture
//!
//! - **domain**: entities, field rules, delete policy and repository traits
//! - **application**: use-case services on top of the repositories
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: Axum REST API with Swagger documentation
//! - **server**: runtime bootstrap (database, migrations, HTTP, shutdown)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::create_api_router;
