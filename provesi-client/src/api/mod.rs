//! Remote service bindings
//!
//! Each service is reached through an object-safe trait so the stateful
//! components (directory, resolver, order board) can be driven by the REST
//! bindings in production and by in-memory fakes in tests.

mod audit;
mod inventory;
mod orders;

pub use audit::RestAuditApi;
pub use inventory::RestInventoryApi;
pub use orders::RestOrderApi;

use async_trait::async_trait;
use shared::PaginatedResponse;
use shared::models::{AuditLog, AuditedService, Item, Product, Shelf, Warehouse};
use shared::order::{NewOrder, Order, StatusChange};

use crate::ClientResult;

/// Inventory service: catalog, warehouses, shelves and physical items
#[async_trait]
pub trait InventoryApi: Send + Sync {
    async fn list_products(&self) -> ClientResult<Vec<Product>>;
    async fn create_product(&self, product: &Product) -> ClientResult<()>;
    async fn update_product(&self, barcode: &str, product: &Product) -> ClientResult<()>;
    async fn delete_product(&self, barcode: &str) -> ClientResult<()>;

    async fn list_warehouses(&self) -> ClientResult<Vec<Warehouse>>;
    async fn create_warehouse(&self, warehouse: &Warehouse) -> ClientResult<()>;
    async fn delete_warehouse(&self, warehouse_id: &str) -> ClientResult<()>;

    async fn list_shelves(&self, warehouse_id: &str) -> ClientResult<Vec<Shelf>>;
    async fn create_shelf(&self, warehouse_id: &str, shelf: &Shelf) -> ClientResult<()>;
    async fn delete_shelf(&self, warehouse_id: &str, shelf_id: &str) -> ClientResult<()>;

    /// Unscoped item listing
    async fn list_items(&self) -> ClientResult<Vec<Item>>;
    async fn create_item(&self, item: &Item) -> ClientResult<()>;
    async fn delete_item(&self, sku: &str) -> ClientResult<()>;
    /// Server-side query for one product stored in one warehouse
    async fn items_by_product_in_warehouse(
        &self,
        product_id: &str,
        warehouse_id: &str,
    ) -> ClientResult<Vec<Item>>;
    /// Server-side query for one shelf of one warehouse
    async fn items_on_shelf(&self, warehouse_id: &str, shelf_id: &str) -> ClientResult<Vec<Item>>;
}

/// Order service
#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn list_orders(&self) -> ClientResult<Vec<Order>>;
    async fn get_order(&self, order_id: i64) -> ClientResult<Order>;
    async fn create_order(&self, order: &NewOrder) -> ClientResult<Order>;
    /// Returns the order as persisted after the change
    async fn change_status(&self, change: &StatusChange) -> ClientResult<Order>;
    /// Whether the stored integrity hash still matches the order
    async fn verify_integrity(&self, order_id: i64) -> ClientResult<bool>;
}

/// Audit service (read-only)
#[async_trait]
pub trait AuditApi: Send + Sync {
    async fn list_logs(
        &self,
        page: u32,
        limit: u32,
        service_id: Option<&str>,
    ) -> ClientResult<PaginatedResponse<AuditLog>>;
    async fn list_services(&self) -> ClientResult<Vec<AuditedService>>;
}
