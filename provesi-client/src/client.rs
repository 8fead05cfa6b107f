//! Client entry point
//!
//! [`ProvesiClient`] wires the REST bindings for the three services and
//! hands out the stateful components. The [`LocationDirectory`] is created
//! once and shared by every consumer.

use std::sync::Arc;

use crate::api::{AuditApi, InventoryApi, OrderApi, RestAuditApi, RestInventoryApi, RestOrderApi};
use crate::audit::AuditBrowser;
use crate::catalog::ProductCatalog;
use crate::http::NetworkHttpClient;
use crate::location::LocationDirectory;
use crate::orders::OrderBoard;
use crate::resolver::{ItemDraft, ItemFilterPanel};
use crate::{ClientConfig, ClientResult};

#[derive(Clone)]
pub struct ProvesiClient {
    inventory: Arc<dyn InventoryApi>,
    orders: Arc<dyn OrderApi>,
    audit: Arc<dyn AuditApi>,
    directory: Arc<LocationDirectory>,
}

impl std::fmt::Debug for ProvesiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvesiClient")
            .field("directory", &self.directory)
            .finish()
    }
}

impl ProvesiClient {
    /// Connect the REST bindings described by `config`
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let inventory = RestInventoryApi::new(NetworkHttpClient::new(&config.inventory_url, config)?);
        let orders = RestOrderApi::new(NetworkHttpClient::new(&config.order_url, config)?);
        let audit = RestAuditApi::new(NetworkHttpClient::new(&config.audit_url, config)?);
        tracing::info!(
            inventory_url = %config.inventory_url,
            order_url = %config.order_url,
            audit_url = %config.audit_url,
            "Provesi client configured"
        );
        Ok(Self::from_services(
            Arc::new(inventory),
            Arc::new(orders),
            Arc::new(audit),
        ))
    }

    /// Build from arbitrary service implementations
    pub fn from_services(
        inventory: Arc<dyn InventoryApi>,
        orders: Arc<dyn OrderApi>,
        audit: Arc<dyn AuditApi>,
    ) -> Self {
        let directory = LocationDirectory::new(inventory.clone());
        Self {
            inventory,
            orders,
            audit,
            directory,
        }
    }

    pub fn inventory(&self) -> &Arc<dyn InventoryApi> {
        &self.inventory
    }

    pub fn directory(&self) -> &Arc<LocationDirectory> {
        &self.directory
    }

    /// New item filter panel over the shared directory
    pub fn item_filter_panel(&self) -> ItemFilterPanel {
        ItemFilterPanel::new(self.directory.clone())
    }

    /// New item creation form over the shared directory
    pub fn item_draft(&self) -> ItemDraft {
        ItemDraft::new(self.directory.clone())
    }

    pub fn product_catalog(&self) -> ProductCatalog {
        ProductCatalog::new(self.inventory.clone())
    }

    pub fn order_board(&self) -> OrderBoard {
        OrderBoard::new(self.orders.clone())
    }

    pub fn audit_browser(&self) -> AuditBrowser {
        AuditBrowser::new(self.audit.clone())
    }
}
