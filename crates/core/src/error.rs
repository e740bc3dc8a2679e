use serde::Serialize;

use crate::types::EntityId;

/// A single failed validation rule on a request body field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Dotted path of the offending field, e.g. `employees[1].name`.
    pub field: String,
    /// Rule code reported by the validator (`length`, `range`, `required`, ...).
    pub code: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("{0}")]
    BadRequest(String),

    #[error("Validation failed with {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn company_not_found(id: EntityId) -> Self {
        CoreError::NotFound {
            entity: "Company",
            id,
        }
    }

    pub fn employee_not_found(id: EntityId) -> Self {
        CoreError::NotFound {
            entity: "Employee",
            id,
        }
    }
}
