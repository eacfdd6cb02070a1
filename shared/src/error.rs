//! Domain error taxonomy
//!
//! Every core operation returns a [`DomainResult`]. Failures are plain
//! values, grouped into three kinds for the transport layer:
//!
//! | Kind | Meaning |
//! |------|---------|
//! | Validation | Malformed input, caller-fixable, never retried |
//! | BusinessRule | State-dependent rejection, caller must refresh |
//! | NotFound | Referenced client/order absent |

use thiserror::Error;

use crate::models::order::OrderStatus;

/// Error classification for transport mapping (400 / 422 / 404)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    BusinessRule,
    NotFound,
}

/// Domain error enum
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    // ========== Validation ==========
    #[error("Order must contain at least one item")]
    EmptyItems,

    #[error("Invalid advance {advance:.2} against total cost {total_cost:.2}")]
    InvalidAdvance { total_cost: f64, advance: f64 },

    #[error("Invalid payment amount: {0:.2}")]
    InvalidAmount(f64),

    #[error("Validation failed: {0}")]
    Validation(String),

    // ========== Business rules ==========
    #[error("Payment {amount:.2} exceeds pending balance {pending_balance:.2}")]
    ExceedsBalance { amount: f64, pending_balance: f64 },

    #[error("Order is already in status {0}")]
    NoOpTransition(OrderStatus),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    // ========== Not found ==========
    #[error("Client not found: {0}")]
    ClientNotFound(i64),

    #[error("Order not found: {0}")]
    OrderNotFound(i64),
}

impl DomainError {
    /// Create a validation error from any displayable message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Classify this error for the transport layer
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::EmptyItems
            | DomainError::InvalidAdvance { .. }
            | DomainError::InvalidAmount(_)
            | DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::ExceedsBalance { .. }
            | DomainError::NoOpTransition(_)
            | DomainError::BusinessRule(_) => ErrorKind::BusinessRule,
            DomainError::ClientNotFound(_) | DomainError::OrderNotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// Result alias used throughout the core
pub type DomainResult<T> = Result<T, DomainError>;
