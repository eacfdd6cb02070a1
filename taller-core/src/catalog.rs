//! Catalog filtering and text search
//!
//! Read-side projections over order and client collections. Search is a
//! case-insensitive OR over code and client name, with phone matched
//! verbatim; the listing contract sorts ascending by estimated delivery
//! date, stable for equal dates.

use shared::models::{Client, Order, OrderStatus};

/// Status filter with an explicit bypass sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl From<OrderStatus> for StatusFilter {
    fn from(status: OrderStatus) -> Self {
        StatusFilter::Only(status)
    }
}

/// Case-insensitive substring search over code, client name, and phone
///
/// Empty terms return the full sequence unchanged.
pub fn search_orders(orders: &[Order], term: &str) -> Vec<Order> {
    if term.is_empty() {
        return orders.to_vec();
    }
    let needle = term.to_lowercase();
    orders
        .iter()
        .filter(|o| {
            o.code.to_lowercase().contains(&needle)
                || o.client_name.to_lowercase().contains(&needle)
                || o.client_phone.contains(term)
        })
        .cloned()
        .collect()
}

/// Keep only orders in the given status; `All` bypasses filtering
pub fn filter_by_status(orders: &[Order], filter: StatusFilter) -> Vec<Order> {
    match filter {
        StatusFilter::All => orders.to_vec(),
        StatusFilter::Only(status) => orders
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect(),
    }
}

/// Search clients by name (case-insensitive) or phone
pub fn search_clients(clients: &[Client], term: &str) -> Vec<Client> {
    if term.is_empty() {
        return clients.to_vec();
    }
    let needle = term.to_lowercase();
    clients
        .iter()
        .filter(|c| c.full_name.to_lowercase().contains(&needle) || c.phone.contains(term))
        .cloned()
        .collect()
}

/// Listing contract: search, then status filter, then a stable ascending
/// sort by estimated delivery date
pub fn list_orders(orders: &[Order], term: &str, filter: StatusFilter) -> Vec<Order> {
    let mut result = filter_by_status(&search_orders(orders, term), filter);
    result.sort_by_key(|o| o.estimated_delivery_date);
    result
}

/// All orders belonging to one client, input order preserved
pub fn orders_of_client(orders: &[Order], client_id: i64) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| o.client_id == client_id)
        .cloned()
        .collect()
}

/// Look up a single order by its exact code
pub fn find_by_code<'a>(orders: &'a [Order], code: &str) -> Option<&'a Order> {
    orders.iter().find(|o| o.code == code)
}
