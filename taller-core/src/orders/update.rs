//! Order editing
//!
//! Replaces the editable fields of an existing order: the item list, the
//! payment classification, the cost/advance pair, and the intake/delivery
//! dates. Identity and history (code, owning client, status, recorded
//! timestamps) are untouched.

use shared::models::{Order, OrderUpdate, PaymentState};
use shared::{DomainError, DomainResult};

use crate::money::{compute_balance, to_decimal, to_f64, validate_advance};
use crate::orders::items::push_item;

/// Apply an edit payload to an order, returning the updated copy
///
/// The item list is rebuilt from the payload and renumbered 1..N. With
/// `paymentState = PAID` the advance is forced to the new total; with
/// `OWING` an absent advance keeps the order's current one.
pub fn update_order(order: &Order, payload: &OrderUpdate) -> DomainResult<Order> {
    if payload.items.is_empty() {
        return Err(DomainError::EmptyItems);
    }

    let advance = match payload.payment_state {
        PaymentState::Paid => payload.total_cost,
        PaymentState::Owing => payload.advance.unwrap_or(order.advance),
    };
    validate_advance(payload.total_cost, advance)?;

    let mut items = Vec::with_capacity(payload.items.len());
    for input in &payload.items {
        push_item(&mut items, input)?;
    }

    let mut updated = order.clone();
    updated.items = items;
    updated.payment_state = payload.payment_state;
    updated.total_cost = to_f64(to_decimal(payload.total_cost));
    updated.advance = to_f64(to_decimal(advance));
    updated.pending_balance = compute_balance(payload.total_cost, advance);
    updated.intake_date = payload.intake_date;
    updated.estimated_delivery_date = payload.estimated_delivery_date;
    Ok(updated)
}
