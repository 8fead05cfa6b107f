//! Order fulfillment status

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// Order status
///
/// Flat enumeration without implicit ordering. The wire literals are the ones
/// the order service stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Transito")]
    Transito,
    #[serde(rename = "Alistamiento")]
    Alistamiento,
    #[serde(rename = "Por verificar")]
    PorVerificar,
    #[serde(rename = "Rechazado x verificar")]
    RechazadoPorVerificar,
    #[serde(rename = "Verificado")]
    Verificado,
    /// Packed, waiting for dispatch; entering it needs invoice data
    #[serde(rename = "Empacado x despachar")]
    EmpacadoPorDespachar,
    #[serde(rename = "Despachado")]
    Despachado,
    #[serde(rename = "Despachado x facturar")]
    DespachadoPorFacturar,
    #[serde(rename = "Entregado")]
    Entregado,
    #[serde(rename = "Devuelto")]
    Devuelto,
    #[serde(rename = "Produccion")]
    Produccion,
    #[serde(rename = "Bordado")]
    Bordado,
    #[serde(rename = "Dropshipping")]
    Dropshipping,
    #[serde(rename = "Compra")]
    Compra,
    #[serde(rename = "Anulado")]
    Anulado,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 15] = [
        OrderStatus::Transito,
        OrderStatus::Alistamiento,
        OrderStatus::PorVerificar,
        OrderStatus::RechazadoPorVerificar,
        OrderStatus::Verificado,
        OrderStatus::EmpacadoPorDespachar,
        OrderStatus::Despachado,
        OrderStatus::DespachadoPorFacturar,
        OrderStatus::Entregado,
        OrderStatus::Devuelto,
        OrderStatus::Produccion,
        OrderStatus::Bordado,
        OrderStatus::Dropshipping,
        OrderStatus::Compra,
        OrderStatus::Anulado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Transito => "Transito",
            OrderStatus::Alistamiento => "Alistamiento",
            OrderStatus::PorVerificar => "Por verificar",
            OrderStatus::RechazadoPorVerificar => "Rechazado x verificar",
            OrderStatus::Verificado => "Verificado",
            OrderStatus::EmpacadoPorDespachar => "Empacado x despachar",
            OrderStatus::Despachado => "Despachado",
            OrderStatus::DespachadoPorFacturar => "Despachado x facturar",
            OrderStatus::Entregado => "Entregado",
            OrderStatus::Devuelto => "Devuelto",
            OrderStatus::Produccion => "Produccion",
            OrderStatus::Bordado => "Bordado",
            OrderStatus::Dropshipping => "Dropshipping",
            OrderStatus::Compra => "Compra",
            OrderStatus::Anulado => "Anulado",
        }
    }

    /// Whether moving an order into this status needs invoice data
    pub fn requires_invoice(&self) -> bool {
        matches!(self, OrderStatus::EmpacadoPorDespachar)
    }
}

impl Default for OrderStatus {
    /// Status the order service assigns to new orders
    fn default() -> Self {
        OrderStatus::Alistamiento
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::ValueOutOfRange,
                    format!("unknown order status: {}", s),
                )
                .with_detail("status", s)
            })
    }
}
