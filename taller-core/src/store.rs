//! External store seam
//!
//! The core never performs I/O; all reads come in as snapshots and every
//! mutation returns the new entity for the caller to persist. Concurrency
//! control (serializing balance updates per order) is the implementation's
//! responsibility, not the core's.

use shared::models::{Client, Order, Payment};
use thiserror::Error;

/// Failure reported by a store implementation
#[derive(Debug, Clone, Error, PartialEq)]
#[error("store error: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence collaborator for the workshop service
///
/// Synchronous by design: the core is a pure computation layer and any
/// async transport belongs to the implementation behind this trait.
pub trait WorkshopStore {
    fn fetch_orders(&self) -> StoreResult<Vec<Order>>;
    fn fetch_clients(&self) -> StoreResult<Vec<Client>>;
    fn fetch_payments(&self, order_id: i64) -> StoreResult<Vec<Payment>>;
    /// All payments, for dashboard aggregation
    fn fetch_all_payments(&self) -> StoreResult<Vec<Payment>>;

    /// Persist and return the stored entity (with assigned id)
    fn persist_order(&mut self, order: Order) -> StoreResult<Order>;
    fn persist_payment(&mut self, payment: Payment) -> StoreResult<Payment>;
    fn persist_client(&mut self, client: Client) -> StoreResult<Client>;

    fn delete_order(&mut self, order_id: i64) -> StoreResult<()>;
    /// Deletion policy for referenced clients lives in the store
    fn delete_client(&mut self, client_id: i64) -> StoreResult<()>;

    /// Generate the next human-readable order code (opaque to the core)
    fn next_order_code(&mut self) -> StoreResult<String>;
}
