//! Shared types for the workshop order system
//!
//! Data models and error types used across crates: clients, work orders,
//! payments, and dashboard statistics.

pub mod error;
pub mod models;

// Re-exports
pub use error::{DomainError, DomainResult, ErrorKind};
pub use serde::{Deserialize, Serialize};
