//! Order Lifecycle Engine
//!
//! Holds the local order list and submits status changes. Validation runs
//! before any remote call; the local list only changes after the order
//! service accepts a change. Failures become notices and are never retried.

use std::sync::Arc;

use shared::order::{InvoiceData, NewOrder, Order, OrderStatus, StatusChange};
use shared::{AppError, ErrorCode};

use super::filter::OrderFilter;
use super::transition::{AllowAll, TransitionPolicy, prepare_status_change};
use crate::api::OrderApi;
use crate::notice::{Notice, NoticeLevel, Notices};
use crate::{ClientError, ClientResult};

pub struct OrderBoard {
    api: Arc<dyn OrderApi>,
    policy: Box<dyn TransitionPolicy>,
    orders: Vec<Order>,
    notices: Notices,
}

impl std::fmt::Debug for OrderBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderBoard")
            .field("orders", &self.orders.len())
            .field("notices", &self.notices.len())
            .finish()
    }
}

impl OrderBoard {
    pub fn new(api: Arc<dyn OrderApi>) -> Self {
        Self {
            api,
            policy: Box::new(AllowAll),
            orders: Vec::new(),
            notices: Notices::default(),
        }
    }

    /// Replace the transition policy
    pub fn with_policy(mut self, policy: impl TransitionPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, order_id: i64) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == Some(order_id))
    }

    pub fn filtered(&self, filter: &OrderFilter) -> Vec<&Order> {
        filter.apply(&self.orders)
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }

    /// Reload the order list. On failure the current list is kept.
    pub async fn load(&mut self) -> ClientResult<()> {
        match self.api.list_orders().await {
            Ok(orders) => {
                tracing::debug!(count = orders.len(), "Orders loaded");
                self.orders = orders;
                Ok(())
            }
            Err(e) => {
                self.notices.push_error("Loading orders", &e);
                Err(e)
            }
        }
    }

    /// Request a status change.
    ///
    /// Rejected locally (no remote call) when invoice data is missing for
    /// `EmpacadoPorDespachar`, when the order is not in the local list, or
    /// when the transition policy refuses it.
    pub async fn request_status_change(
        &mut self,
        order_id: i64,
        target: OrderStatus,
        invoice: Option<InvoiceData>,
    ) -> ClientResult<Order> {
        let change = match self.check_change(order_id, target, invoice) {
            Ok(change) => change,
            Err(e) => {
                self.notices.push_error("Changing order status", &e);
                return Err(e);
            }
        };

        let updated = match self.api.change_status(&change).await {
            Ok(order) => order,
            Err(e) => {
                self.notices.push_error("Changing order status", &e);
                return Err(e);
            }
        };

        tracing::info!(order_id, %target, "Order status changed");
        self.upsert(order_id, updated.clone());
        self.notices.push(Notice::info(format!(
            "Order {order_id} moved to {}",
            updated.status
        )));
        Ok(updated)
    }

    fn check_change(
        &self,
        order_id: i64,
        target: OrderStatus,
        invoice: Option<InvoiceData>,
    ) -> ClientResult<StatusChange> {
        let change = prepare_status_change(order_id, target, invoice)?;
        let Some(current) = self.order(order_id).map(|o| o.status) else {
            if self.policy.allows_unloaded(target) {
                tracing::debug!(order_id, %target, "Order not loaded, leaving the check to the service");
                return Ok(change);
            }
            return Err(AppError::with_message(
                ErrorCode::OrderNotFound,
                format!("order {order_id} is not loaded"),
            )
            .into());
        };
        if !self.policy.allows(current, target) {
            return Err(AppError::with_message(
                ErrorCode::TransitionNotAllowed,
                format!("order {order_id} cannot move from {current} to {target}"),
            )
            .into());
        }
        Ok(change)
    }

    /// Create an order and add it to the local list
    pub async fn create_order(&mut self, order: NewOrder) -> ClientResult<Order> {
        if let Err(e) = order.validate() {
            let err = ClientError::from(e);
            self.notices.push_error("Creating order", &err);
            return Err(err);
        }
        let created = match self.api.create_order(&order).await {
            Ok(created) => created,
            Err(e) => {
                self.notices.push_error("Creating order", &e);
                return Err(e);
            }
        };
        tracing::info!(order_id = ?created.id, operator = %created.operator, "Order created");
        match created.id {
            Some(id) => self.upsert(id, created.clone()),
            None => self.orders.push(created.clone()),
        }
        Ok(created)
    }

    /// Fetch one order and refresh its local copy
    pub async fn fetch_order(&mut self, order_id: i64) -> ClientResult<Order> {
        match self.api.get_order(order_id).await {
            Ok(order) => {
                self.upsert(order_id, order.clone());
                Ok(order)
            }
            Err(e) => {
                self.notices.push_error("Loading order", &e);
                Err(e)
            }
        }
    }

    /// Ask the order service whether an order's integrity hash still holds
    pub async fn verify_integrity(&mut self, order_id: i64) -> ClientResult<bool> {
        match self.api.verify_integrity(order_id).await {
            Ok(valid) => {
                if !valid {
                    tracing::warn!(order_id, "Order integrity check failed");
                    self.notices.push(Notice {
                        level: NoticeLevel::Error,
                        code: ErrorCode::IntegrityMismatch,
                        message: format!("Order {order_id} failed its integrity check"),
                    });
                }
                Ok(valid)
            }
            Err(e) => {
                self.notices.push_error("Verifying order", &e);
                Err(e)
            }
        }
    }

    fn upsert(&mut self, order_id: i64, order: Order) {
        match self.orders.iter_mut().find(|o| o.id == Some(order_id)) {
            Some(slot) => *slot = order,
            None => self.orders.push(order),
        }
    }
}
