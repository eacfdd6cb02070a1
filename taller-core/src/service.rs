//! Workshop service
//!
//! Thin orchestration over a [`WorkshopStore`]: fetch snapshots, run the
//! pure domain operations, persist the returned entities. Mirrors the
//! client/order/payment/dashboard service surface of the application.

use chrono::{DateTime, Utc};
use shared::models::{
    Client, ClientCreate, DashboardStats, Order, OrderCreate, OrderStatus, OrderUpdate,
    PaymentCreate,
};
use shared::DomainError;
use thiserror::Error;

use crate::catalog::{self, StatusFilter};
use crate::clients;
use crate::dashboard::{self, ReceivablePolicy};
use crate::ledger::{self, RegisteredPayment};
use crate::orders;
use crate::store::{StoreError, WorkshopStore};

/// Service failure: a domain rejection or a store fault
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Orchestrates domain operations against a store implementation
pub struct WorkshopService<S: WorkshopStore> {
    store: S,
    receivable_policy: ReceivablePolicy,
}

impl<S: WorkshopStore> WorkshopService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            receivable_policy: ReceivablePolicy::default(),
        }
    }

    pub fn with_receivable_policy(mut self, policy: ReceivablePolicy) -> Self {
        self.receivable_policy = policy;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ========== Clients ==========

    /// Register a new client
    pub fn create_client(&mut self, payload: &ClientCreate, now: DateTime<Utc>) -> ServiceResult<Client> {
        clients::validate_client(payload)?;

        let client = Client {
            id: None,
            full_name: payload.full_name.trim().to_string(),
            phone: payload.phone.trim().to_string(),
            email: payload.email.clone(),
            address: payload.address.clone(),
            notes: payload.notes.clone(),
            total_orders: 0,
            last_visit: None,
            registered_at: now,
        };
        let stored = self.store.persist_client(client)?;
        tracing::info!(client_id = ?stored.id, "client registered");
        Ok(stored)
    }

    pub fn search_clients(&self, term: &str) -> ServiceResult<Vec<Client>> {
        let clients = self.store.fetch_clients()?;
        Ok(catalog::search_clients(&clients, term))
    }

    /// Edit a client's contact details, re-snapshotting the denormalized
    /// name/phone search keys on the client's orders
    pub fn update_client(&mut self, client_id: i64, payload: &ClientCreate) -> ServiceResult<Client> {
        clients::validate_client(payload)?;

        let mut client = self
            .find_client(client_id)?
            .ok_or(DomainError::ClientNotFound(client_id))?;
        client.full_name = payload.full_name.trim().to_string();
        client.phone = payload.phone.trim().to_string();
        client.email = payload.email.clone();
        client.address = payload.address.clone();
        client.notes = payload.notes.clone();
        let stored = self.store.persist_client(client)?;

        for mut order in self.orders_of_client(client_id)? {
            order.client_name = stored.full_name.clone();
            order.client_phone = stored.phone.clone();
            self.store.persist_order(order)?;
        }
        tracing::info!(client_id, "client updated");
        Ok(stored)
    }

    /// Delete a client; referential policy is enforced by the store
    pub fn delete_client(&mut self, client_id: i64) -> ServiceResult<()> {
        self.store.delete_client(client_id)?;
        tracing::info!(client_id, "client deleted");
        Ok(())
    }

    // ========== Orders ==========

    /// Create an order for an existing client and refresh the client's stats
    pub fn create_order(&mut self, payload: &OrderCreate, now: DateTime<Utc>) -> ServiceResult<Order> {
        let client = self
            .find_client(payload.client_id)?
            .ok_or(DomainError::ClientNotFound(payload.client_id))?;

        let code = self.store.next_order_code()?;
        let order = orders::create_order(payload, &client, code, now)?;
        let stored = self.store.persist_order(order)?;

        self.refresh_client_stats(&client)?;
        tracing::info!(code = %stored.code, client_id = payload.client_id, "order created");
        Ok(stored)
    }

    /// Edit an order's items, cost/advance, and dates
    pub fn update_order(&mut self, order_id: i64, payload: &OrderUpdate) -> ServiceResult<Order> {
        let order = self
            .find_order(order_id)?
            .ok_or(DomainError::OrderNotFound(order_id))?;
        let updated = orders::update_order(&order, payload)?;
        let stored = self.store.persist_order(updated)?;
        tracing::info!(code = %stored.code, "order updated");
        Ok(stored)
    }

    /// Transition an order's status
    pub fn change_status(
        &mut self,
        order_id: i64,
        new_status: OrderStatus,
        now: DateTime<Utc>,
    ) -> ServiceResult<Order> {
        let order = self
            .find_order(order_id)?
            .ok_or(DomainError::OrderNotFound(order_id))?;
        let updated = orders::set_status(&order, new_status, now)?;
        Ok(self.store.persist_order(updated)?)
    }

    /// Delete an order and refresh the owning client's stats
    pub fn delete_order(&mut self, order_id: i64) -> ServiceResult<()> {
        let order = self
            .find_order(order_id)?
            .ok_or(DomainError::OrderNotFound(order_id))?;
        self.store.delete_order(order_id)?;

        if let Some(client) = self.find_client(order.client_id)? {
            self.refresh_client_stats(&client)?;
        }
        tracing::info!(code = %order.code, "order deleted");
        Ok(())
    }

    /// Search + status filter + delivery-date ordering
    pub fn list_orders(&self, term: &str, filter: StatusFilter) -> ServiceResult<Vec<Order>> {
        let orders = self.store.fetch_orders()?;
        Ok(catalog::list_orders(&orders, term, filter))
    }

    pub fn orders_of_client(&self, client_id: i64) -> ServiceResult<Vec<Order>> {
        let orders = self.store.fetch_orders()?;
        Ok(catalog::orders_of_client(&orders, client_id))
    }

    pub fn find_order_by_code(&self, code: &str) -> ServiceResult<Option<Order>> {
        let orders = self.store.fetch_orders()?;
        Ok(catalog::find_by_code(&orders, code).cloned())
    }

    // ========== Payments ==========

    /// Register a payment and persist both the record and the updated order
    pub fn register_payment(
        &mut self,
        payload: &PaymentCreate,
        now: DateTime<Utc>,
    ) -> ServiceResult<RegisteredPayment> {
        let order = self
            .find_order(payload.order_id)?
            .ok_or(DomainError::OrderNotFound(payload.order_id))?;

        let registered = ledger::register_payment(&order, payload, now)?;
        let payment = self.store.persist_payment(registered.payment)?;
        let order = self.store.persist_order(registered.order)?;
        tracing::info!(code = %order.code, amount = payment.amount, "payment registered");
        Ok(RegisteredPayment { payment, order })
    }

    // ========== Dashboard ==========

    pub fn dashboard(&self, now: DateTime<Utc>) -> ServiceResult<DashboardStats> {
        let orders = self.store.fetch_orders()?;
        let payments = self.store.fetch_all_payments()?;
        Ok(dashboard::compute_stats(
            &orders,
            &payments,
            now,
            self.receivable_policy,
        ))
    }

    // ========== Helpers ==========

    fn find_order(&self, order_id: i64) -> ServiceResult<Option<Order>> {
        let orders = self.store.fetch_orders()?;
        Ok(orders.into_iter().find(|o| o.id == Some(order_id)))
    }

    fn find_client(&self, client_id: i64) -> ServiceResult<Option<Client>> {
        let clients = self.store.fetch_clients()?;
        Ok(clients.into_iter().find(|c| c.id == Some(client_id)))
    }

    fn refresh_client_stats(&mut self, client: &Client) -> ServiceResult<()> {
        let Some(client_id) = client.id else {
            return Ok(());
        };
        let client_orders = self.orders_of_client(client_id)?;
        let updated = clients::recompute_client_stats(client, &client_orders);
        self.store.persist_client(updated)?;
        Ok(())
    }
}
