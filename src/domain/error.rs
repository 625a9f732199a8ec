//! Domain errors

use thiserror::Error;

use super::validation::Violations;

/// Errors surfaced by the marketplace core.
///
/// Every variant is scoped to one request; none of them is fatal to the
/// process.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The identifier does not resolve to a persisted entity
    #[error("{entity} not found: id={id}")]
    NotFound { entity: &'static str, id: i32 },

    /// Input failed one or more field or reference rules
    #[error("Validation failed: {0}")]
    Validation(Violations),

    /// Delete refused because products still reference the entity
    #[error("{entity} {id} is referenced by {dependents} product(s)")]
    ReferentialIntegrity {
        entity: &'static str,
        id: i32,
        dependents: u64,
    },

    /// Storage/database error
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }
}

impl From<Violations> for DomainError {
    fn from(violations: Violations) -> Self {
        Self::Validation(violations)
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
