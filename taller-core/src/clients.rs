//! Client aggregate
//!
//! Registration validation plus the derived order-count/last-visit fields,
//! recomputed whenever an order for the client is created or deleted.

use shared::models::{Client, ClientCreate, ClientStats, Order};
use shared::DomainResult;

use crate::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_PHONE_LEN, validate_optional_email,
    validate_optional_text, validate_required_text,
};

/// Validate a client registration payload
pub fn validate_client(payload: &ClientCreate) -> DomainResult<()> {
    validate_required_text(&payload.full_name, "fullName", MAX_NAME_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_PHONE_LEN)?;
    validate_optional_email(&payload.email, "email")?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    Ok(())
}

/// Compute derived stats from the client's orders
pub fn compute_stats(orders_of_client: &[Order]) -> ClientStats {
    ClientStats {
        total_orders: orders_of_client.len() as i64,
        last_visit: orders_of_client
            .iter()
            .map(|o| o.creation_timestamp)
            .max(),
    }
}

/// Return an updated client with recomputed stats
pub fn recompute_client_stats(client: &Client, orders_of_client: &[Order]) -> Client {
    let stats = compute_stats(orders_of_client);
    let mut updated = client.clone();
    updated.total_orders = stats.total_orders;
    updated.last_visit = stats.last_visit;
    updated
}
