//! Item creation form state

use std::sync::Arc;

use shared::models::{Item, ItemState, Shelf, ShelfCapacity};
use shared::{AppError, AppResult, ErrorCode};

use super::cascade::{ShelfCascade, ShelfRequest};
use super::filter::present;
use crate::location::LocationDirectory;
use crate::notice::{Notice, Notices};
use crate::sequence::Outcome;
use crate::{ClientError, ClientResult};

/// Draft of a new physical item
#[derive(Debug)]
pub struct ItemDraft {
    directory: Arc<LocationDirectory>,
    pub sku: String,
    pub state: ItemState,
    product_id: Option<String>,
    cascade: ShelfCascade,
    notices: Notices,
}

impl ItemDraft {
    pub fn new(directory: Arc<LocationDirectory>) -> Self {
        Self {
            directory,
            sku: String::new(),
            state: ItemState::default(),
            product_id: None,
            cascade: ShelfCascade::new(),
            notices: Notices::default(),
        }
    }

    pub fn cascade(&self) -> &ShelfCascade {
        &self.cascade
    }

    pub fn shelves(&self) -> &[Shelf] {
        self.cascade.shelves()
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn set_product(&mut self, product_id: Option<String>) {
        self.product_id = present(product_id);
    }

    pub fn select_warehouse(&mut self, warehouse_id: Option<String>) -> Option<ShelfRequest> {
        self.cascade.select_warehouse(warehouse_id)
    }

    pub fn apply_shelves(
        &mut self,
        request: &ShelfRequest,
        result: ClientResult<Vec<Shelf>>,
    ) -> Outcome {
        match self.cascade.apply_shelves(request, result) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.notices.push_error("Loading shelves", &e);
                Outcome::Applied
            }
        }
    }

    /// Select a warehouse and load its shelves
    pub async fn change_warehouse(&mut self, warehouse_id: Option<String>) -> Outcome {
        let Some(request) = self.select_warehouse(warehouse_id) else {
            return Outcome::Applied;
        };
        let result = request.fetch(&self.directory).await;
        self.apply_shelves(&request, result)
    }

    pub fn select_shelf(&mut self, shelf_id: Option<String>) -> ClientResult<()> {
        self.cascade.select_shelf(shelf_id)
    }

    /// Advisory capacity of the selected shelf
    pub fn selected_capacity(&self) -> Option<ShelfCapacity> {
        self.cascade.selected_shelf().map(Shelf::capacity)
    }

    /// Build the item, checking every field is filled
    pub fn to_item(&self) -> AppResult<Item> {
        let sku = self.sku.trim();
        if sku.is_empty() {
            return Err(AppError::required("_id"));
        }
        let product_id = self
            .product_id
            .as_deref()
            .ok_or_else(|| AppError::required("producto_id"))?;
        let warehouse_id = self
            .cascade
            .warehouse_id()
            .ok_or_else(|| AppError::required("bodega_id"))?;
        let shelf = self.cascade.selected_shelf().ok_or_else(|| {
            AppError::with_message(ErrorCode::ShelfNotInWarehouse, "a shelf of the warehouse is required")
                .with_detail("field", "estanteria_id")
        })?;
        Ok(Item::new(sku, product_id, warehouse_id, shelf.id.clone()).with_state(self.state))
    }

    /// Submit the draft; on success the form starts over
    pub async fn submit(&mut self) -> ClientResult<Item> {
        let item = match self.to_item() {
            Ok(item) => item,
            Err(e) => {
                let err = ClientError::from(e);
                self.notices.push_error("Creating item", &err);
                return Err(err);
            }
        };
        let full = self.selected_capacity().filter(ShelfCapacity::is_full);
        if let Err(e) = self.directory.api().create_item(&item).await {
            self.notices.push_error("Creating item", &e);
            return Err(e);
        }
        // Capacity is advisory: the item is placed, the overflow is reported
        if let Some(capacity) = full {
            tracing::warn!(
                shelf_id = %item.shelf_id,
                used = capacity.used,
                total = capacity.total,
                "Item placed on a full shelf"
            );
            self.notices.push(Notice::warning(
                ErrorCode::ShelfOverCapacity,
                format!(
                    "Shelf {} was already full ({}/{})",
                    item.shelf_id, capacity.used, capacity.total
                ),
            ));
        }
        tracing::info!(sku = %item.sku, warehouse_id = %item.warehouse_id, "Item created");
        self.notices
            .push(Notice::info(format!("Item {} created", item.sku)));
        self.reset();
        Ok(item)
    }

    pub fn reset(&mut self) {
        self.sku.clear();
        self.state = ItemState::default();
        self.product_id = None;
        self.cascade.reset();
    }
}
