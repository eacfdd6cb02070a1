//! Order creation
//!
//! Builds a new PENDING order from an intake payload, fixing the payment
//! state and advance at creation time. The human-readable code comes from
//! the external store.

use chrono::{DateTime, Utc};
use shared::models::{Client, Order, OrderCreate, OrderStatus, PaymentState};
use shared::{DomainError, DomainResult};

use crate::money::{compute_balance, to_decimal, to_f64, validate_advance};
use crate::orders::items::validate_item;

/// Create a new order for a client
///
/// `client` is the already-fetched owner record; its name and phone are
/// snapshotted onto the order as search keys. With `paymentState = PAID`
/// the supplied advance is ignored and forced to the total cost; with
/// `OWING` the advance is taken as supplied (default 0).
pub fn create_order(
    payload: &OrderCreate,
    client: &Client,
    code: impl Into<String>,
    now: DateTime<Utc>,
) -> DomainResult<Order> {
    // 1. Items sequence must be non-empty
    if payload.items.is_empty() {
        return Err(DomainError::EmptyItems);
    }

    // 2. Validate each item's required text fields
    for item in &payload.items {
        validate_item(item)?;
    }

    // 3. Resolve the advance: PAID implies fully advanced
    let advance = match payload.payment_state {
        PaymentState::Paid => payload.total_cost,
        PaymentState::Owing => payload.advance.unwrap_or(0.0),
    };
    validate_advance(payload.total_cost, advance)?;

    // 4. Assign sequential item numbers following input order
    let items = payload
        .items
        .iter()
        .enumerate()
        .map(|(index, input)| shared::models::OrderItem {
            id: None,
            item_number: index as i32 + 1,
            article_type: input.article_type.clone(),
            services: input.services.clone(),
            problem_description: input.problem_description.clone(),
            solution_details: input.solution_details.clone(),
        })
        .collect();

    // 5. New orders always start PENDING
    let order = Order {
        id: None,
        code: code.into(),
        client_id: payload.client_id,
        client_name: client.full_name.clone(),
        client_phone: client.phone.clone(),
        items,
        status: OrderStatus::Pending,
        payment_state: payload.payment_state,
        total_cost: to_f64(to_decimal(payload.total_cost)),
        advance: to_f64(to_decimal(advance)),
        pending_balance: compute_balance(payload.total_cost, advance),
        intake_date: payload.intake_date,
        estimated_delivery_date: payload.estimated_delivery_date,
        actual_delivery_date: None,
        creation_timestamp: now,
    };

    Ok(order)
}
