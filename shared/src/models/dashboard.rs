//! Dashboard Statistics Model

use serde::{Deserialize, Serialize};

/// Summary statistics computed over the full order and payment sets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub pending_orders: i64,
    pub in_progress_orders: i64,
    pub ready_orders: i64,
    pub delivered_orders: i64,
    /// Sum of payments registered today
    pub revenue_today: f64,
    /// Sum of payments registered this calendar week (Monday start)
    pub revenue_week: f64,
    /// Sum of payments registered this calendar month
    pub revenue_month: f64,
    /// Sum of pending balances over open orders (policy-controlled)
    pub total_receivable: f64,
    /// Orders past their estimated delivery date, not yet delivered
    pub overdue_count: i64,
    /// READY orders not yet picked up
    pub unclaimed_count: i64,
    /// Orders whose estimated delivery date is today
    pub due_today_count: i64,
    /// Orders delivered within the current calendar week
    pub completed_this_week: i64,
}
