//! Mapping of domain errors onto HTTP responses
//!
//! | Error | Status | Body |
//! |---|---|---|
//! | `Validation` | 400 | `{"field": ["message", ...]}` |
//! | `NotFound` | 404 | `{"detail": "..."}` |
//! | `ReferentialIntegrity` | 409 | `{"detail": "..."}` |
//! | `Database` | 500 | `{"detail": "Internal server error"}` |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Body of every non-validation error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Error returned by every REST handler.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::ReferentialIntegrity { .. } => StatusCode::CONFLICT,
            DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.0 {
            DomainError::Validation(violations) => (status, Json(violations)).into_response(),
            DomainError::Database(msg) => {
                error!("Database error while handling request: {}", msg);
                (status, Json(ErrorDetail::new("Internal server error"))).into_response()
            }
            other => (status, Json(ErrorDetail::new(other.to_string()))).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Violations;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_field_map() {
        let mut violations = Violations::new();
        violations.add("location", "Please No X in location");
        violations.add("location", "Please No Y in location");

        let response = ApiError(DomainError::Validation(violations)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "location": ["Please No X in location", "Please No Y in location"]
            })
        );
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_detail() {
        let response = ApiError(DomainError::not_found("Market", 42)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Market not found: id=42");
    }

    #[tokio::test]
    async fn referential_integrity_maps_to_409() {
        let err = DomainError::ReferentialIntegrity {
            entity: "Seller",
            id: 3,
            dependents: 2,
        };
        let response = ApiError(err).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn database_error_hides_the_cause() {
        let response =
            ApiError(DomainError::Database("disk I/O error".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Internal server error");
    }
}
