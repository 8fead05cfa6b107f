//! Location Directory
//!
//! Shared backing store for warehouses and their shelves. Both cascade
//! instances (item creation form and item filter panel) read through the
//! same directory. Mutations never touch the cache optimistically: after a
//! successful remote write the affected collection is fetched again from the
//! inventory service.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use dashmap::DashMap;
use shared::models::{Shelf, ShelfCapacity, Warehouse};
use shared::{AppError, ErrorCode};

use crate::ClientResult;
use crate::api::InventoryApi;

/// Warehouses and per-warehouse shelf lists
pub struct LocationDirectory {
    api: Arc<dyn InventoryApi>,
    warehouses: RwLock<Vec<Warehouse>>,
    /// warehouse id -> last fetched shelf list
    shelves: DashMap<String, Vec<Shelf>>,
}

impl std::fmt::Debug for LocationDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationDirectory")
            .field("warehouses", &self.cached_warehouses().len())
            .field("shelf_lists", &self.shelves.len())
            .finish()
    }
}

impl LocationDirectory {
    pub fn new(api: Arc<dyn InventoryApi>) -> Arc<Self> {
        Arc::new(Self {
            api,
            warehouses: RwLock::new(Vec::new()),
            shelves: DashMap::new(),
        })
    }

    pub fn api(&self) -> &Arc<dyn InventoryApi> {
        &self.api
    }

    // ========== Queries ==========

    /// Fetch every warehouse with its embedded shelves.
    ///
    /// Shelf lists of warehouses missing from the reply are dropped.
    pub async fn list_warehouses(&self) -> ClientResult<Vec<Warehouse>> {
        let warehouses = self.api.list_warehouses().await?;
        let fresh: HashSet<&str> = warehouses.iter().filter_map(|w| w.id.as_deref()).collect();
        self.shelves.retain(|id, _| fresh.contains(id.as_str()));
        for warehouse in &warehouses {
            if let Some(id) = &warehouse.id {
                self.shelves.insert(id.clone(), warehouse.shelves.clone());
            }
        }
        *self
            .warehouses
            .write()
            .unwrap_or_else(PoisonError::into_inner) = warehouses.clone();
        tracing::debug!(count = warehouses.len(), "Warehouses synced");
        Ok(warehouses)
    }

    /// Fetch the shelves of one warehouse
    pub async fn list_shelves_for(&self, warehouse_id: &str) -> ClientResult<Vec<Shelf>> {
        let shelves = self.api.list_shelves(warehouse_id).await?;
        self.store_shelves(warehouse_id, &shelves);
        tracing::debug!(warehouse_id, count = shelves.len(), "Shelves synced");
        Ok(shelves)
    }

    // ========== Mutations ==========

    /// Add a shelf, then re-sync the warehouse's shelf list.
    ///
    /// Capacity is advisory: a shelf whose used capacity exceeds its total
    /// is accepted and only logged.
    pub async fn add_shelf(&self, warehouse_id: &str, shelf: Shelf) -> ClientResult<Vec<Shelf>> {
        require_id(warehouse_id)?;
        shelf.validate()?;
        if shelf.capacity().is_over() {
            tracing::warn!(
                warehouse_id,
                shelf_id = %shelf.id,
                used = shelf.used_capacity,
                total = shelf.total_capacity,
                "Shelf used capacity exceeds total capacity"
            );
        }
        self.api.create_shelf(warehouse_id, &shelf).await?;
        tracing::info!(warehouse_id, shelf_id = %shelf.id, "Shelf added");
        self.list_shelves_for(warehouse_id).await
    }

    /// Remove a shelf, then re-sync the warehouse's shelf list
    pub async fn remove_shelf(&self, warehouse_id: &str, shelf_id: &str) -> ClientResult<Vec<Shelf>> {
        require_id(warehouse_id)?;
        if shelf_id.trim().is_empty() {
            return Err(AppError::required("numero_estanteria").into());
        }
        self.api.delete_shelf(warehouse_id, shelf_id).await?;
        tracing::info!(warehouse_id, shelf_id, "Shelf removed");
        self.list_shelves_for(warehouse_id).await
    }

    /// Create a warehouse, then re-sync the warehouse list
    pub async fn create_warehouse(&self, warehouse: Warehouse) -> ClientResult<Vec<Warehouse>> {
        warehouse.validate()?;
        self.api.create_warehouse(&warehouse).await?;
        tracing::info!(city = %warehouse.city, "Warehouse created");
        self.list_warehouses().await
    }

    /// Delete a warehouse, then re-sync the warehouse list
    pub async fn delete_warehouse(&self, warehouse_id: &str) -> ClientResult<Vec<Warehouse>> {
        require_id(warehouse_id)?;
        self.api.delete_warehouse(warehouse_id).await?;
        self.shelves.remove(warehouse_id);
        tracing::info!(warehouse_id, "Warehouse deleted");
        self.list_warehouses().await
    }

    // ========== Cache reads ==========

    pub fn cached_warehouses(&self) -> Vec<Warehouse> {
        self.warehouses
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn cached_warehouse(&self, warehouse_id: &str) -> Option<Warehouse> {
        self.warehouses
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|w| w.id.as_deref() == Some(warehouse_id))
            .cloned()
    }

    /// Last fetched shelf list of a warehouse
    pub fn cached_shelves(&self, warehouse_id: &str) -> Option<Vec<Shelf>> {
        self.shelves.get(warehouse_id).map(|s| s.clone())
    }

    /// Capacity figures of a cached shelf
    pub fn shelf_capacity(&self, warehouse_id: &str, shelf_id: &str) -> Option<ShelfCapacity> {
        self.shelves
            .get(warehouse_id)?
            .iter()
            .find(|s| s.id == shelf_id)
            .map(Shelf::capacity)
    }

    fn store_shelves(&self, warehouse_id: &str, shelves: &[Shelf]) {
        self.shelves
            .insert(warehouse_id.to_string(), shelves.to_vec());
        let mut warehouses = self
            .warehouses
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(warehouse) = warehouses
            .iter_mut()
            .find(|w| w.id.as_deref() == Some(warehouse_id))
        {
            warehouse.shelves = shelves.to_vec();
        }
    }
}

fn require_id(warehouse_id: &str) -> Result<(), AppError> {
    if warehouse_id.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::WarehouseNotFound,
            "warehouse id is required",
        ));
    }
    Ok(())
}
