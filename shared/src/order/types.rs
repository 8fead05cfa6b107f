//! Order entity and order service payloads

use serde::{Deserialize, Serialize};

use super::OrderStatus;
use crate::error::{AppError, AppResult, ErrorCode};

// ============================================================================
// Invoice
// ============================================================================

/// Invoice data attached when an order is packed for dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceData {
    #[serde(rename = "metodo_pago")]
    pub payment_method: String,
    #[serde(rename = "num_cuenta")]
    pub account_number: String,
    /// Receipt reference
    #[serde(rename = "comprobante")]
    pub receipt: String,
}

impl InvoiceData {
    pub fn new(
        payment_method: impl Into<String>,
        account_number: impl Into<String>,
        receipt: impl Into<String>,
    ) -> Self {
        Self {
            payment_method: payment_method.into(),
            account_number: account_number.into(),
            receipt: receipt.into(),
        }
    }

    /// Wire names of the fields that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("metodo_pago", &self.payment_method),
            ("num_cuenta", &self.account_number),
            ("comprobante", &self.receipt),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// All three fields must be non-empty
    pub fn validate(&self) -> AppResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }
        Err(AppError::with_message(
            ErrorCode::InvoiceFieldMissing,
            format!("missing invoice fields: {}", missing.join(", ")),
        )
        .with_detail("fields", missing))
    }
}

/// Invoice as reported on an order: either a reference or the inline record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvoiceRef {
    Id(i64),
    Record(InvoiceData),
}

// ============================================================================
// Order
// ============================================================================

/// One requested product line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedProduct {
    /// Product barcode
    #[serde(rename = "producto")]
    pub product: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

impl RequestedProduct {
    pub fn new(product: impl Into<String>, quantity: u32) -> Self {
        Self {
            product: product.into(),
            quantity,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.product.trim().is_empty() {
            return Err(AppError::with_message(
                ErrorCode::RequestedProductInvalid,
                "requested product needs a product",
            ));
        }
        if self.quantity == 0 {
            return Err(AppError::with_message(
                ErrorCode::RequestedProductInvalid,
                format!("quantity for {} must be positive", self.product),
            )
            .with_detail("producto", self.product.clone()));
        }
        Ok(())
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Assigned by the order service, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "estado", default)]
    pub status: OrderStatus,
    /// Item SKUs
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(rename = "operario", default)]
    pub operator: String,
    #[serde(rename = "cliente", default)]
    pub customer_id: Option<i64>,
    #[serde(rename = "bodega_id", default, skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<String>,
    #[serde(
        rename = "productos_solicitados",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub requested_products: Option<Vec<RequestedProduct>>,
    #[serde(rename = "factura", default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<InvoiceRef>,
    /// Computed and verified by the order service only
    #[serde(
        rename = "hash_de_integridad",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub integrity_hash: Option<String>,
}

/// Create order payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    #[serde(rename = "bodega_seleccionada")]
    pub warehouse_id: String,
    #[serde(rename = "cliente")]
    pub customer_id: i64,
    #[serde(rename = "operario")]
    pub operator: String,
    pub items: Vec<String>,
    #[serde(rename = "productos_solicitados")]
    pub requested_products: Vec<RequestedProduct>,
}

impl NewOrder {
    pub fn validate(&self) -> AppResult<()> {
        if self.operator.trim().is_empty() {
            return Err(AppError::new(ErrorCode::OperatorRequired).with_detail("field", "operario"));
        }
        if self.warehouse_id.trim().is_empty() {
            return Err(AppError::required("bodega_seleccionada"));
        }
        for line in &self.requested_products {
            line.validate()?;
        }
        Ok(())
    }
}

/// Status change payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    #[serde(rename = "pedido_id")]
    pub order_id: i64,
    #[serde(rename = "nuevo_estado")]
    pub target: OrderStatus,
    #[serde(rename = "datos_factura", default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<InvoiceData>,
}

/// Reply of the order service to create / status-change calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReply {
    #[serde(rename = "mensaje", default)]
    pub message: String,
    #[serde(rename = "pedido")]
    pub order: Order,
    #[serde(rename = "codigo", default)]
    pub code: String,
}
