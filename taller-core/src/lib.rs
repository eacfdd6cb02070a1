//! Workshop order domain core
//!
//! Pure, synchronous domain logic for a repair workshop: order creation
//! and status lifecycle, payment bookkeeping with decimal-precise money,
//! client aggregates, catalog search, and dashboard statistics.
//!
//! Every operation is a deterministic function of its inputs plus an
//! explicit `now`; persistence and transport live behind the
//! [`store::WorkshopStore`] seam.

pub mod catalog;
pub mod clients;
pub mod dashboard;
pub mod ledger;
pub mod money;
pub mod orders;
pub mod service;
pub mod store;
pub mod time;
pub mod validation;

// Re-exports
pub use shared::{DomainError, DomainResult, ErrorKind};
pub use catalog::StatusFilter;
pub use dashboard::ReceivablePolicy;
pub use ledger::RegisteredPayment;
pub use service::{ServiceError, ServiceResult, WorkshopService};
pub use store::{StoreError, StoreResult, WorkshopStore};
