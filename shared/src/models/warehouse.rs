//! Warehouse and Shelf Models

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Shelf entity
///
/// Identified by a key unique within its warehouse only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelf {
    /// Shelf number
    #[serde(rename = "_id", alias = "numero_estanteria")]
    pub id: String,
    #[serde(rename = "area_bodega")]
    pub area: String,
    #[serde(rename = "capacidad_total")]
    pub total_capacity: u32,
    #[serde(rename = "capacidad_utilizada", default)]
    pub used_capacity: u32,
}

impl Shelf {
    pub fn new(id: impl Into<String>, area: impl Into<String>, total_capacity: u32) -> Self {
        Self {
            id: id.into(),
            area: area.into(),
            total_capacity,
            used_capacity: 0,
        }
    }

    pub fn with_used(mut self, used_capacity: u32) -> Self {
        self.used_capacity = used_capacity;
        self
    }

    /// Capacity figures (advisory, never enforced against item placement)
    pub fn capacity(&self) -> ShelfCapacity {
        ShelfCapacity {
            used: self.used_capacity,
            total: self.total_capacity,
        }
    }

    /// Checks run before the shelf is sent to the inventory service.
    ///
    /// `used <= total` is not checked here; see [`ShelfCapacity::is_over`].
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::required("numero_estanteria"));
        }
        if self.area.trim().is_empty() {
            return Err(AppError::required("area_bodega"));
        }
        Ok(())
    }
}

/// Used/total capacity of one shelf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfCapacity {
    pub used: u32,
    pub total: u32,
}

impl ShelfCapacity {
    /// Fill ratio clamped to `[0, 1]`
    ///
    /// A shelf with zero total capacity reads as full when anything is stored
    /// on it, empty otherwise.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return if self.used > 0 { 1.0 } else { 0.0 };
        }
        (f64::from(self.used) / f64::from(self.total)).min(1.0)
    }

    pub fn is_full(&self) -> bool {
        self.used >= self.total
    }

    /// Data reported more usage than capacity
    pub fn is_over(&self) -> bool {
        self.used > self.total
    }

    pub fn free(&self) -> u32 {
        self.total.saturating_sub(self.used)
    }
}

/// Warehouse entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    /// Assigned by the inventory service, absent until persisted
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "estanterias", default)]
    pub shelves: Vec<Shelf>,
}

impl Warehouse {
    /// New, not yet persisted warehouse without shelves
    pub fn new(city: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: None,
            city: city.into(),
            address: address.into(),
            shelves: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn shelf(&self, shelf_id: &str) -> Option<&Shelf> {
        self.shelves.iter().find(|s| s.id == shelf_id)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.city.trim().is_empty() {
            return Err(AppError::required("ciudad"));
        }
        if self.address.trim().is_empty() {
            return Err(AppError::required("direccion"));
        }
        Ok(())
    }
}
