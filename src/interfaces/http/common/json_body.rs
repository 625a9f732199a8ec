//! JSON body extractor for Axum
//!
//! `JsonBody<T>` works like `axum::Json<T>`, but a body that cannot be
//! parsed is answered with `400` and the same field-map shape used for
//! validation failures, under the `non_field_errors` key. Field rules are
//! applied later by the services, so every violation is reported at once.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::domain::Violations;

/// Key used for errors that do not belong to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// An extractor that deserializes a JSON request body.
///
/// ```ignore
/// async fn handler(JsonBody(body): JsonBody<MarketRequest>) {
///     // `body` parsed, fields not yet validated
/// }
/// ```
pub struct JsonBody<T>(pub T);

/// Rejection for `JsonBody` extraction failures.
pub struct JsonBodyRejection(JsonRejection);

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        let violations = Violations::single(NON_FIELD_ERRORS, format!("Invalid JSON: {}", self.0));
        (StatusCode::BAD_REQUEST, Json(violations)).into_response()
    }
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(JsonBodyRejection)?;
        Ok(JsonBody(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
