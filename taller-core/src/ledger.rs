//! Payment ledger
//!
//! Append-only payment registration against an order. The ledger is the
//! only writer of `advance` after creation; the pending balance is always
//! recomputed from total_cost and advance at the moment of registration,
//! never read from a possibly stale field.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::models::{Order, Payment, PaymentCreate, PaymentState};
use shared::{DomainError, DomainResult};

use crate::money::{to_decimal, to_f64, validate_amount};

/// Result of a successful registration: the immutable payment record plus
/// the updated order, so callers can refresh derived views without a
/// second fetch. Both must be persisted by the caller.
#[derive(Debug, Clone)]
pub struct RegisteredPayment {
    pub payment: Payment,
    pub order: Order,
}

/// Register a payment against an order
pub fn register_payment(
    order: &Order,
    payload: &PaymentCreate,
    now: DateTime<Utc>,
) -> DomainResult<RegisteredPayment> {
    // 1. Amount must be finite and positive
    validate_amount(payload.amount)?;

    // 2. The payload must reference this order
    let order_id = order
        .id
        .ok_or_else(|| DomainError::validation("order has not been persisted yet"))?;
    if payload.order_id != order_id {
        return Err(DomainError::validation(format!(
            "payment references order {} but was applied to order {order_id}",
            payload.order_id
        )));
    }

    // 3. Overpayment guard against the balance recomputed right now
    let pending = (to_decimal(order.total_cost) - to_decimal(order.advance)).max(Decimal::ZERO);
    let amount = to_decimal(payload.amount);
    if amount > pending {
        return Err(DomainError::ExceedsBalance {
            amount: payload.amount,
            pending_balance: to_f64(pending),
        });
    }

    // 4. Apply: advance grows, balance shrinks by exactly the amount
    let mut updated = order.clone();
    updated.advance = to_f64(to_decimal(order.advance) + amount);
    updated.pending_balance = to_f64(pending - amount);

    // 5. A zero balance flips the payment state (informational, status untouched)
    if updated.pending_balance == 0.0 && updated.payment_state != PaymentState::Paid {
        updated.payment_state = PaymentState::Paid;
        tracing::debug!(code = %updated.code, "order fully paid");
    }

    let payment = Payment {
        id: None,
        order_id,
        order_code: order.code.clone(),
        amount: to_f64(amount),
        method: payload.method.clone(),
        notes: payload.notes.clone(),
        payment_timestamp: now,
    };

    Ok(RegisteredPayment {
        payment,
        order: updated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{OrderItem, OrderStatus};

    fn test_order(total: f64, advance: f64, state: PaymentState) -> Order {
        Order {
            id: Some(1),
            code: "ORD-0001".to_string(),
            client_id: 9,
            client_name: "Maria Lopez".to_string(),
            client_phone: "999111222".to_string(),
            items: vec![OrderItem {
                id: None,
                item_number: 1,
                article_type: "Printer".to_string(),
                services: "Maintenance".to_string(),
                problem_description: "Paper jam".to_string(),
                solution_details: None,
            }],
            status: OrderStatus::InProgress,
            payment_state: state,
            total_cost: total,
            advance,
            pending_balance: crate::money::compute_balance(total, advance),
            intake_date: "2024-11-04T09:00:00Z".parse().unwrap(),
            estimated_delivery_date: "2024-11-08T18:00:00Z".parse().unwrap(),
            actual_delivery_date: None,
            creation_timestamp: "2024-11-04T09:05:00Z".parse().unwrap(),
        }
    }

    fn pay(amount: f64) -> PaymentCreate {
        PaymentCreate {
            order_id: 1,
            amount,
            method: Some("Efectivo".to_string()),
            notes: None,
        }
    }

    fn now() -> DateTime<Utc> {
        "2024-11-05T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_payment_reduces_balance_exactly() {
        let order = test_order(150.0, 50.0, PaymentState::Owing);
        let result = register_payment(&order, &pay(30.0), now()).unwrap();

        assert_eq!(result.order.advance, 80.0);
        assert_eq!(result.order.pending_balance, 70.0);
        assert_eq!(result.order.payment_state, PaymentState::Owing);
        assert_eq!(result.payment.amount, 30.0);
        assert_eq!(result.payment.order_code, "ORD-0001");
        assert_eq!(result.payment.payment_timestamp, now());
    }

    #[test]
    fn test_full_settlement_scenario() {
        // 150.00 total, OWING with 50.00 advance -> balance 100.00
        let order = test_order(150.0, 50.0, PaymentState::Owing);
        assert_eq!(order.pending_balance, 100.0);

        // Paying 100.00 settles the order
        let settled = register_payment(&order, &pay(100.0), now()).unwrap();
        assert_eq!(settled.order.pending_balance, 0.0);
        assert_eq!(settled.order.payment_state, PaymentState::Paid);
        // Status is untouched by payment
        assert_eq!(settled.order.status, OrderStatus::InProgress);

        // A further 0.01 exceeds the (zero) balance
        let result = register_payment(&settled.order, &pay(0.01), now());
        assert_eq!(
            result.unwrap_err(),
            DomainError::ExceedsBalance {
                amount: 0.01,
                pending_balance: 0.0
            }
        );
    }

    #[test]
    fn test_overpayment_rejected_and_order_unchanged() {
        let order = test_order(100.0, 60.0, PaymentState::Owing);
        let result = register_payment(&order, &pay(50.0), now());

        assert_eq!(
            result.unwrap_err(),
            DomainError::ExceedsBalance {
                amount: 50.0,
                pending_balance: 40.0
            }
        );
        // Input untouched
        assert_eq!(order.advance, 60.0);
        assert_eq!(order.pending_balance, 40.0);
        assert_eq!(order.payment_state, PaymentState::Owing);
    }

    #[test]
    fn test_exact_remaining_succeeds() {
        let order = test_order(100.0, 60.0, PaymentState::Owing);
        let result = register_payment(&order, &pay(40.0), now()).unwrap();
        assert_eq!(result.order.pending_balance, 0.0);
        assert_eq!(result.order.payment_state, PaymentState::Paid);
    }

    #[test]
    fn test_zero_and_negative_amounts_rejected() {
        let order = test_order(100.0, 0.0, PaymentState::Owing);
        assert!(matches!(
            register_payment(&order, &pay(0.0), now()),
            Err(DomainError::InvalidAmount(_))
        ));
        assert!(matches!(
            register_payment(&order, &pay(-10.0), now()),
            Err(DomainError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_mismatched_order_id_rejected() {
        let order = test_order(100.0, 0.0, PaymentState::Owing);
        let mut payload = pay(20.0);
        payload.order_id = 999;
        assert!(matches!(
            register_payment(&order, &payload, now()),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_payments_never_exceed_original_total() {
        // Monotone property over a run of payments
        let mut order = test_order(150.0, 0.0, PaymentState::Owing);
        let mut paid_total = 0.0;

        for amount in [40.0, 40.0, 40.0, 30.0] {
            let result = register_payment(&order, &pay(amount), now()).unwrap();
            assert!(result.order.pending_balance < order.pending_balance);
            paid_total += result.payment.amount;
            order = result.order;
        }

        assert_eq!(paid_total, 150.0);
        assert_eq!(order.pending_balance, 0.0);
        assert!(register_payment(&order, &pay(0.01), now()).is_err());
    }

    #[test]
    fn test_decimal_amounts_reconcile() {
        // 0.1 + 0.2 style drift must not leak into balances
        let order = test_order(0.3, 0.0, PaymentState::Owing);
        let first = register_payment(&order, &pay(0.1), now()).unwrap();
        let second = register_payment(&first.order, &pay(0.2), now()).unwrap();
        assert_eq!(second.order.pending_balance, 0.0);
        assert_eq!(second.order.payment_state, PaymentState::Paid);
    }
}
