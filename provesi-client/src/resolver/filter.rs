//! Item filter and query-shape selection

use shared::models::Item;

use crate::ClientResult;
use crate::api::InventoryApi;

/// Partial item filter; every dimension is independently optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub warehouse_id: Option<String>,
    pub shelf_id: Option<String>,
    pub product_id: Option<String>,
}

impl ItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warehouse(mut self, warehouse_id: impl Into<String>) -> Self {
        self.warehouse_id = present(Some(warehouse_id.into()));
        self
    }

    pub fn shelf(mut self, shelf_id: impl Into<String>) -> Self {
        self.shelf_id = present(Some(shelf_id.into()));
        self
    }

    pub fn product(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = present(Some(product_id.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.warehouse_id.is_none() && self.shelf_id.is_none() && self.product_id.is_none()
    }

    /// Remote query shape for this filter, first match wins
    pub fn strategy(&self) -> ResolutionStrategy {
        match (&self.warehouse_id, &self.shelf_id, &self.product_id) {
            (Some(warehouse_id), _, Some(product_id)) => ResolutionStrategy::ProductInWarehouse {
                warehouse_id: warehouse_id.clone(),
                product_id: product_id.clone(),
            },
            (Some(warehouse_id), Some(shelf_id), None) => ResolutionStrategy::Shelf {
                warehouse_id: warehouse_id.clone(),
                shelf_id: shelf_id.clone(),
            },
            _ => ResolutionStrategy::Scan,
        }
    }

    /// AND across the present dimensions only
    pub fn matches(&self, item: &Item) -> bool {
        fn dim(want: &Option<String>, have: &str) -> bool {
            want.as_deref().is_none_or(|w| w == have)
        }
        dim(&self.warehouse_id, &item.warehouse_id)
            && dim(&self.shelf_id, &item.shelf_id)
            && dim(&self.product_id, &item.product_id)
    }

    pub fn apply(&self, items: Vec<Item>) -> Vec<Item> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

/// Empty strings mean "no selection"
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// How a filter is resolved against the inventory service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionStrategy {
    /// Combo query for one product inside one warehouse
    ProductInWarehouse {
        warehouse_id: String,
        product_id: String,
    },
    /// Per-shelf query scoped to a warehouse
    Shelf {
        warehouse_id: String,
        shelf_id: String,
    },
    /// Full unscoped fetch filtered in memory
    Scan,
}

impl ResolutionStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            ResolutionStrategy::ProductInWarehouse { .. } => "product_in_warehouse",
            ResolutionStrategy::Shelf { .. } => "shelf",
            ResolutionStrategy::Scan => "scan",
        }
    }
}

/// Resolve the item set for `filter`.
///
/// A combo result is narrowed by the shelf too when one is selected, so the
/// result always honours every present dimension.
pub async fn resolve_items(api: &dyn InventoryApi, filter: &ItemFilter) -> ClientResult<Vec<Item>> {
    let strategy = filter.strategy();
    tracing::debug!(strategy = strategy.name(), ?filter, "Resolving items");

    let items = match strategy {
        ResolutionStrategy::ProductInWarehouse {
            warehouse_id,
            product_id,
        } => {
            let items = api
                .items_by_product_in_warehouse(&product_id, &warehouse_id)
                .await?;
            match &filter.shelf_id {
                Some(_) => filter.apply(items),
                None => items,
            }
        }
        ResolutionStrategy::Shelf {
            warehouse_id,
            shelf_id,
        } => api.items_on_shelf(&warehouse_id, &shelf_id).await?,
        ResolutionStrategy::Scan => filter.apply(api.list_items().await?),
    };
    Ok(items)
}
