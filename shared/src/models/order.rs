//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status lifecycle: PENDING → IN_PROGRESS → READY → DELIVERED
///
/// The enum is ordered so callers can check forward progression; the core
/// itself only rejects no-op transitions.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Ready,
    Delivered,
}

impl OrderStatus {
    /// All statuses in lifecycle order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ];

    /// Position in the lifecycle (0-based)
    pub fn rank(&self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::InProgress => 1,
            OrderStatus::Ready => 2,
            OrderStatus::Delivered => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Ready => "READY",
            OrderStatus::Delivered => "DELIVERED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment classification fixed at order creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentState {
    Paid,
    #[default]
    Owing,
}

/// One article/service line within an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Option<i64>,
    /// Sequential within the order, starting at 1
    pub item_number: i32,
    pub article_type: String,
    pub services: String,
    pub problem_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_details: Option<String>,
}

/// Item payload for order creation/editing (no number assigned yet)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    pub article_type: String,
    pub services: String,
    pub problem_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_details: Option<String>,
}

/// Order entity
///
/// `client_name`/`client_phone` are denormalized search keys snapshotted
/// from the client record. `pending_balance` is derived; the ledger is the
/// only writer of `advance` after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<i64>,
    /// Human-readable code generated by the external store
    pub code: String,
    pub client_id: i64,
    pub client_name: String,
    pub client_phone: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub payment_state: PaymentState,
    /// Total cost in currency units (2 decimals)
    pub total_cost: f64,
    /// Amount advanced at creation plus registered payments
    pub advance: f64,
    /// Derived: max(0, total_cost - advance)
    pub pending_balance: f64,
    pub intake_date: DateTime<Utc>,
    pub estimated_delivery_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_delivery_date: Option<DateTime<Utc>>,
    pub creation_timestamp: DateTime<Utc>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub client_id: i64,
    pub items: Vec<ItemInput>,
    pub payment_state: PaymentState,
    pub total_cost: f64,
    /// Ignored when payment_state is PAID (forced to total_cost)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance: Option<f64>,
    pub intake_date: DateTime<Utc>,
    pub estimated_delivery_date: DateTime<Utc>,
}

/// Edit order payload: replaces the editable fields of an existing order
///
/// The owning client, the code, the status, and the recorded timestamps
/// stay as they are.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub items: Vec<ItemInput>,
    pub payment_state: PaymentState,
    pub total_cost: f64,
    /// PAID forces the full total; OWING keeps the current advance when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance: Option<f64>,
    pub intake_date: DateTime<Utc>,
    pub estimated_delivery_date: DateTime<Utc>,
}
