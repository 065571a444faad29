//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A single validation failure, optionally scoped to a field.
///
/// Kept as its own type so that [`DomainError::AggregateValidation`] can
/// preserve every individual failure instead of collapsing them into one
/// generic message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// Offending field, when the failure is field-scoped.
    pub field: Option<String>,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Infrastructure concerns belong elsewhere.
///
/// Every variant carries a stable machine code ([`DomainError::code`]) and a
/// suggested transport status ([`DomainError::status_code`]) strictly for
/// downstream translation by a presentation collaborator; the domain layer
/// never performs that translation itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested entity does not exist (domain-level).
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// An entity's state violates its own contract.
    #[error("invalid entity: {0}")]
    InvalidEntity(String),

    /// A business rule rejected the operation.
    #[error("business rule violation: {0}")]
    BusinessRuleViolation(String),

    /// A conflict occurred (e.g. stale version / optimistic concurrency).
    #[error("concurrency conflict: {0}")]
    Concurrency(String),

    /// Authorization failure at the domain boundary.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(ValidationError),

    /// Several validations failed at once; each failure is preserved in order.
    #[error("aggregate validation failed: {} error(s)", .0.len())]
    AggregateValidation(Vec<ValidationError>),
}

impl DomainError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EntityNotFound(_) => "ENTITY_NOT_FOUND",
            Self::InvalidEntity(_) => "INVALID_ENTITY",
            Self::BusinessRuleViolation(_) => "BUSINESS_RULE_VIOLATION",
            Self::Concurrency(_) => "CONCURRENCY_ERROR",
            Self::Unauthorized(_) => "AUTHORIZATION_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::AggregateValidation(_) => "AGGREGATE_VALIDATION_ERROR",
        }
    }

    /// Suggested transport status for a presentation collaborator.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EntityNotFound(_) => 404,
            Self::Concurrency(_) => 409,
            Self::Unauthorized(_) => 403,
            Self::InvalidEntity(_) | Self::BusinessRuleViolation(_) => 422,
            Self::Validation(_) | Self::AggregateValidation(_) => 400,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::new(msg))
    }

    pub fn validation_for(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Validation(ValidationError::for_field(field, msg))
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::EntityNotFound(msg.into())
    }

    pub fn invalid_entity(msg: impl Into<String>) -> Self {
        Self::InvalidEntity(msg.into())
    }

    pub fn business_rule(msg: impl Into<String>) -> Self {
        Self::BusinessRuleViolation(msg.into())
    }

    pub fn concurrency(msg: impl Into<String>) -> Self {
        Self::Concurrency(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }
}
