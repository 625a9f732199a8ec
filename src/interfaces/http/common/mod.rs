//! Shared HTTP plumbing: error mapping and the JSON body extractor

pub mod errors;
pub mod json_body;

pub use errors::{ApiError, ApiResult, ErrorDetail};
pub use json_body::JsonBody;
