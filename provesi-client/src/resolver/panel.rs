//! Item filter panel state

use std::sync::Arc;

use shared::models::{Item, Shelf};

use super::cascade::{ShelfCascade, ShelfRequest};
use super::filter::{ItemFilter, ResolutionStrategy, present, resolve_items};
use crate::ClientResult;
use crate::api::InventoryApi;
use crate::location::LocationDirectory;
use crate::notice::Notices;
use crate::sequence::{Outcome, RequestSequencer, Ticket};

/// Pending item resolution
#[derive(Debug, Clone)]
pub struct ItemQuery {
    pub filter: ItemFilter,
    ticket: Ticket,
}

impl ItemQuery {
    pub fn strategy(&self) -> ResolutionStrategy {
        self.filter.strategy()
    }

    pub fn seq(&self) -> u64 {
        self.ticket.seq()
    }

    pub async fn run(&self, api: &dyn InventoryApi) -> ClientResult<Vec<Item>> {
        self.ticket.run(resolve_items(api, &self.filter)).await
    }
}

/// Filter panel over the item list
///
/// Owns its own cascade and its own displayed item set. A failed load keeps
/// the previously displayed items.
#[derive(Debug)]
pub struct ItemFilterPanel {
    directory: Arc<LocationDirectory>,
    cascade: ShelfCascade,
    product_id: Option<String>,
    items: Vec<Item>,
    queries: RequestSequencer,
    notices: Notices,
}

impl ItemFilterPanel {
    pub fn new(directory: Arc<LocationDirectory>) -> Self {
        Self {
            directory,
            cascade: ShelfCascade::new(),
            product_id: None,
            items: Vec::new(),
            queries: RequestSequencer::new(),
            notices: Notices::default(),
        }
    }

    /// Current filter tuple
    pub fn filter(&self) -> ItemFilter {
        ItemFilter {
            warehouse_id: self.cascade.warehouse_id().map(str::to_string),
            shelf_id: self.cascade.shelf_id().map(str::to_string),
            product_id: self.product_id.clone(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn shelves(&self) -> &[Shelf] {
        self.cascade.shelves()
    }

    pub fn cascade(&self) -> &ShelfCascade {
        &self.cascade
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }

    // ========== Selection ==========

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

    pub fn select_product(&mut self, product_id: Option<String>) {
        self.product_id = present(product_id);
    }

    // ========== Item loading ==========

    /// Start resolving the current filter, superseding any pending load
    pub fn begin_query(&mut self) -> ItemQuery {
        ItemQuery {
            filter: self.filter(),
            ticket: self.queries.issue(),
        }
    }

    /// Start loading the unscoped item set
    pub fn begin_reload(&mut self) -> ItemQuery {
        ItemQuery {
            filter: ItemFilter::default(),
            ticket: self.queries.issue(),
        }
    }

    /// Write a load result back. Stale results are dropped; failures keep
    /// the displayed items and raise a notice.
    pub fn apply_items(&mut self, query: &ItemQuery, result: ClientResult<Vec<Item>>) -> Outcome {
        if !self.queries.settle(&query.ticket) {
            return Outcome::Discarded;
        }
        match result {
            Ok(items) => {
                tracing::debug!(
                    seq = query.seq(),
                    strategy = query.strategy().name(),
                    count = items.len(),
                    "Items loaded"
                );
                self.items = items;
                Outcome::Applied
            }
            Err(e) if e.is_superseded() => Outcome::Discarded,
            Err(e) => {
                self.notices.push_error("Loading items", &e);
                Outcome::Applied
            }
        }
    }

    /// Resolve the current filter and display the result
    pub async fn refresh(&mut self) -> Outcome {
        let query = self.begin_query();
        let result = query.run(self.directory.api().as_ref()).await;
        self.apply_items(&query, result)
    }

    /// Clear every dimension and reload the unscoped item set
    pub async fn reset(&mut self) -> Outcome {
        self.cascade.reset();
        self.product_id = None;
        let query = self.begin_reload();
        let result = query.run(self.directory.api().as_ref()).await;
        self.apply_items(&query, result)
    }

    /// Delete an item, then reload with the current filter
    pub async fn delete_item(&mut self, sku: &str) -> ClientResult<Outcome> {
        if let Err(e) = self.directory.api().delete_item(sku).await {
            self.notices.push_error("Deleting item", &e);
            return Err(e);
        }
        tracing::info!(sku, "Item deleted");
        Ok(self.refresh().await)
    }
}
