//! Item Model (one physical, individually tracked unit of a product)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Item lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemState {
    #[default]
    #[serde(rename = "disponible")]
    Available,
    #[serde(rename = "vendido")]
    Sold,
    #[serde(rename = "dañado")]
    Damaged,
    #[serde(rename = "devuelto")]
    Returned,
}

impl ItemState {
    pub const ALL: [ItemState; 4] = [
        ItemState::Available,
        ItemState::Sold,
        ItemState::Damaged,
        ItemState::Returned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemState::Available => "disponible",
            ItemState::Sold => "vendido",
            ItemState::Damaged => "dañado",
            ItemState::Returned => "devuelto",
        }
    }
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item entity
///
/// The shelf reference belongs to the referenced warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub sku: String,
    #[serde(rename = "estado", default)]
    pub state: ItemState,
    #[serde(rename = "producto_id")]
    pub product_id: String,
    #[serde(rename = "bodega_id")]
    pub warehouse_id: String,
    #[serde(rename = "estanteria_id")]
    pub shelf_id: String,
    #[serde(rename = "ingreso_fecha", default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<String>,
    #[serde(rename = "salida_fecha", default, skip_serializing_if = "Option::is_none")]
    pub shipped_at: Option<String>,
}

impl Item {
    pub fn new(
        sku: impl Into<String>,
        product_id: impl Into<String>,
        warehouse_id: impl Into<String>,
        shelf_id: impl Into<String>,
    ) -> Self {
        Self {
            sku: sku.into(),
            state: ItemState::Available,
            product_id: product_id.into(),
            warehouse_id: warehouse_id.into(),
            shelf_id: shelf_id.into(),
            received_at: None,
            shipped_at: None,
        }
    }

    pub fn with_state(mut self, state: ItemState) -> Self {
        self.state = state;
        self
    }
}
