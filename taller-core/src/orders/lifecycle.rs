//! Order status lifecycle
//!
//! The lifecycle is PENDING → IN_PROGRESS → READY → DELIVERED. The core
//! rejects only same-status transitions; strict forward progression is
//! available to callers through [`is_forward_transition`].

use chrono::{DateTime, Utc};
use shared::models::{Order, OrderStatus};
use shared::{DomainError, DomainResult};

use crate::time::same_day;

/// Pure transition validator: rejects only the no-op transition
pub fn validate_transition(current: OrderStatus, next: OrderStatus) -> DomainResult<()> {
    if current == next {
        return Err(DomainError::NoOpTransition(current));
    }
    Ok(())
}

/// Whether `next` is the immediate forward step from `current`
///
/// The lifecycle is strictly linear, so a forward transition advances the
/// rank by exactly one. Callers wanting strict progression check this in
/// addition to [`validate_transition`].
pub fn is_forward_transition(current: OrderStatus, next: OrderStatus) -> bool {
    next.rank() == current.rank() + 1
}

/// Transition an order to a new status, returning the updated copy
///
/// Entering DELIVERED stamps `actual_delivery_date` with `now` when unset.
pub fn set_status(order: &Order, new_status: OrderStatus, now: DateTime<Utc>) -> DomainResult<Order> {
    validate_transition(order.status, new_status)?;

    let mut updated = order.clone();
    updated.status = new_status;
    if new_status == OrderStatus::Delivered && updated.actual_delivery_date.is_none() {
        updated.actual_delivery_date = Some(now);
    }

    tracing::info!(
        code = %updated.code,
        from = %order.status,
        to = %new_status,
        "order status changed"
    );
    Ok(updated)
}

/// Past the estimated delivery date and not yet delivered
pub fn is_overdue(order: &Order, now: DateTime<Utc>) -> bool {
    order.estimated_delivery_date < now && order.status != OrderStatus::Delivered
}

/// Estimated delivery date falls on today's calendar day, regardless of status
pub fn is_due_today(order: &Order, now: DateTime<Utc>) -> bool {
    same_day(order.estimated_delivery_date, now)
}
