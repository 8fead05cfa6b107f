//! Status transition rules
//!
//! Any order may move to any status unless a [`TransitionPolicy`] says
//! otherwise; [`AllowAll`] is the default. The only data requirement is
//! invoice data when entering [`OrderStatus::EmpacadoPorDespachar`].

use std::collections::HashSet;

use shared::order::{InvoiceData, OrderStatus, StatusChange};
use shared::{AppError, AppResult, ErrorCode};

/// Predicate deciding whether `from -> to` may be requested
pub trait TransitionPolicy: Send + Sync {
    fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool;

    /// Whether a change may be sent for an order missing from the local
    /// list, whose current status is unknown. The order service then decides.
    fn allows_unloaded(&self, _to: OrderStatus) -> bool {
        true
    }
}

/// No source/target restriction
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl TransitionPolicy for AllowAll {
    fn allows(&self, _from: OrderStatus, _to: OrderStatus) -> bool {
        true
    }
}

impl<F> TransitionPolicy for F
where
    F: Fn(OrderStatus, OrderStatus) -> bool + Send + Sync,
{
    fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool {
        self(from, to)
    }
}

/// Explicit adjacency table.
///
/// Sources without any entry are unrestricted, so a table only narrows the
/// statuses it names.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    edges: HashSet<(OrderStatus, OrderStatus)>,
    restricted: HashSet<OrderStatus>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow(mut self, from: OrderStatus, targets: &[OrderStatus]) -> Self {
        self.restricted.insert(from);
        for to in targets {
            self.edges.insert((from, *to));
        }
        self
    }

    /// The picking/verification flow the warehouse staff follow
    pub fn fulfillment() -> Self {
        use OrderStatus::*;
        Self::new()
            .allow(Alistamiento, &[PorVerificar, Anulado])
            .allow(PorVerificar, &[Verificado, RechazadoPorVerificar])
            .allow(Verificado, &[EmpacadoPorDespachar])
    }
}

impl TransitionPolicy for TransitionTable {
    fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool {
        !self.restricted.contains(&from) || self.edges.contains(&(from, to))
    }

    /// Without a known source the table cannot be checked, so a table
    /// restricting anything refuses unloaded orders.
    fn allows_unloaded(&self, _to: OrderStatus) -> bool {
        self.restricted.is_empty()
    }
}

/// Build the status change payload, enforcing the invoice requirement.
///
/// Invoice data is required and must be complete for
/// `EmpacadoPorDespachar`; for every other target it is dropped.
pub fn prepare_status_change(
    order_id: i64,
    target: OrderStatus,
    invoice: Option<InvoiceData>,
) -> AppResult<StatusChange> {
    let invoice = if target.requires_invoice() {
        let invoice = invoice.ok_or_else(|| {
            AppError::with_message(
                ErrorCode::InvoiceDataRequired,
                format!("invoice data is required to move an order to {target}"),
            )
        })?;
        invoice.validate()?;
        Some(invoice)
    } else {
        if invoice.is_some() {
            tracing::debug!(order_id, %target, "Ignoring invoice data for status without invoice");
        }
        None
    };

    Ok(StatusChange {
        order_id,
        target,
        invoice,
    })
}
