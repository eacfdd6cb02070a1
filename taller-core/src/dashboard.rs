//! Dashboard aggregation
//!
//! Summary statistics computed by scanning the order and payment
//! collections against a supplied `now`. Pure read-side projection;
//! nothing here is stored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::models::{DashboardStats, Order, OrderStatus, Payment};

use crate::money::{compute_balance, to_decimal, to_f64};
use crate::orders::{is_due_today, is_overdue};
use crate::time::{same_day, same_month, same_week};

/// Whether DELIVERED orders with an outstanding balance count as receivable
///
/// The workshop normally writes off balances on delivered orders, so the
/// default excludes them; the inclusive policy keeps them on the books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReceivablePolicy {
    #[default]
    ExcludeDelivered,
    IncludeDelivered,
}

/// Compute dashboard statistics over the full order and payment sets
pub fn compute_stats(
    orders: &[Order],
    payments: &[Payment],
    now: DateTime<Utc>,
    policy: ReceivablePolicy,
) -> DashboardStats {
    let mut stats = DashboardStats::default();

    let mut receivable = Decimal::ZERO;
    for order in orders {
        match order.status {
            OrderStatus::Pending => stats.pending_orders += 1,
            OrderStatus::InProgress => stats.in_progress_orders += 1,
            OrderStatus::Ready => stats.ready_orders += 1,
            OrderStatus::Delivered => stats.delivered_orders += 1,
        }

        if is_overdue(order, now) {
            stats.overdue_count += 1;
        }
        if order.status == OrderStatus::Ready {
            stats.unclaimed_count += 1;
        }
        if is_due_today(order, now) {
            stats.due_today_count += 1;
        }
        if order.status == OrderStatus::Delivered
            && let Some(delivered_at) = order.actual_delivery_date
            && same_week(delivered_at, now)
        {
            stats.completed_this_week += 1;
        }

        let include = policy == ReceivablePolicy::IncludeDelivered
            || order.status != OrderStatus::Delivered;
        if include {
            receivable += to_decimal(compute_balance(order.total_cost, order.advance));
        }
    }
    stats.total_receivable = to_f64(receivable);

    let mut today = Decimal::ZERO;
    let mut week = Decimal::ZERO;
    let mut month = Decimal::ZERO;
    for payment in payments {
        let amount = to_decimal(payment.amount);
        if same_day(payment.payment_timestamp, now) {
            today += amount;
        }
        if same_week(payment.payment_timestamp, now) {
            week += amount;
        }
        if same_month(payment.payment_timestamp, now) {
            month += amount;
        }
    }
    stats.revenue_today = to_f64(today);
    stats.revenue_week = to_f64(week);
    stats.revenue_month = to_f64(month);

    stats
}
