use shared::order::{NewOrder, RequestedProduct};
use shared::{AppError, AppResult};

/// Order creation form
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    pub warehouse_id: String,
    pub customer_id: Option<i64>,
    pub operator: String,
    items: Vec<String>,
    requested: Vec<RequestedProduct>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn requested(&self) -> &[RequestedProduct] {
        &self.requested
    }

    /// Attach an item SKU; duplicates are ignored
    pub fn add_item(&mut self, sku: impl Into<String>) {
        let sku = sku.into();
        if !sku.trim().is_empty() && !self.items.contains(&sku) {
            self.items.push(sku);
        }
    }

    pub fn remove_item(&mut self, sku: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|s| s != sku);
        self.items.len() != before
    }

    /// Add a requested product line. A product already requested gets its
    /// quantity increased.
    pub fn request_product(&mut self, product: impl Into<String>, quantity: u32) -> AppResult<()> {
        let line = RequestedProduct::new(product, quantity);
        line.validate()?;
        match self.requested.iter_mut().find(|l| l.product == line.product) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => self.requested.push(line),
        }
        Ok(())
    }

    pub fn remove_requested(&mut self, index: usize) -> Option<RequestedProduct> {
        (index < self.requested.len()).then(|| self.requested.remove(index))
    }

    /// Validated creation payload
    pub fn build(&self) -> AppResult<NewOrder> {
        let customer_id = self
            .customer_id
            .ok_or_else(|| AppError::required("cliente"))?;
        let order = NewOrder {
            warehouse_id: self.warehouse_id.trim().to_string(),
            customer_id,
            operator: self.operator.trim().to_string(),
            items: self.items.clone(),
            requested_products: self.requested.clone(),
        };
        order.validate()?;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    fn draft() -> OrderDraft {
        OrderDraft {
            warehouse_id: "BOG-1".into(),
            customer_id: Some(7),
            operator: "operario1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_request_product_merges_lines() {
        let mut d = draft();
        d.request_product("SKU-001", 2).unwrap();
        d.request_product("SKU-001", 3).unwrap();
        d.request_product("SKU-002", 1).unwrap();
        assert_eq!(d.requested().len(), 2);
        assert_eq!(d.requested()[0].quantity, 5);

        let err = d.request_product("SKU-003", 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequestedProductInvalid);
        assert!(d.remove_requested(5).is_none());
        assert_eq!(d.remove_requested(1).unwrap().product, "SKU-002");
    }

    #[test]
    fn test_build_requires_operator_and_customer() {
        let mut d = draft();
        d.add_item("I1");
        d.add_item("I1");
        let order = d.build().unwrap();
        assert_eq!(order.items, ["I1"]);

        d.operator = "  ".into();
        assert_eq!(d.build().unwrap_err().code, ErrorCode::OperatorRequired);

        let mut d = draft();
        d.customer_id = None;
        assert_eq!(d.build().unwrap_err().code, ErrorCode::RequiredField);
    }
}
