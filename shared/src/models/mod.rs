//! Data models
//!
//! Plain serde records exchanged with the external store and the
//! presentation layer. JSON field names are camelCase; timestamps are
//! ISO-8601 via chrono.

pub mod client;
pub mod dashboard;
pub mod order;
pub mod payment;

pub use client::{Client, ClientCreate, ClientStats};
pub use dashboard::DashboardStats;
pub use order::{ItemInput, Order, OrderCreate, OrderItem, OrderStatus, OrderUpdate, PaymentState};
pub use payment::{Payment, PaymentCreate};
