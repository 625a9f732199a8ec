//! HTTP REST API interfaces
//!
//! - `common`: error mapping and the JSON body extractor
//! - `modules`: handlers and DTOs per resource, plus health/metrics/request-id
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, AppState};
