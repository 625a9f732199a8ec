//! What happens to products when their market or seller is deleted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Delete policy for entities that products depend on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletePolicy {
    /// Refuse the delete while any product still references the entity.
    #[default]
    Restrict,
    /// Delete the dependent products in the same transaction.
    Cascade,
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Restrict => write!(f, "restrict"),
            Self::Cascade => write!(f, "cascade"),
        }
    }
}
