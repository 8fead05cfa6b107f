use shared::order::{Order, OrderStatus};

/// Read-side order filter, applied locally
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// Exact status match
    pub status: Option<OrderStatus>,
    /// Case-insensitive substring of the operator name
    pub operator: Option<String>,
}

impl OrderFilter {
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        let operator = operator.into();
        self.operator = (!operator.trim().is_empty()).then_some(operator);
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        if self.status.is_some_and(|s| s != order.status) {
            return false;
        }
        match &self.operator {
            Some(needle) => order
                .operator
                .to_lowercase()
                .contains(&needle.trim().to_lowercase()),
            None => true,
        }
    }

    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|o| self.matches(o)).collect()
    }
}
