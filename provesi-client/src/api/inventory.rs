use async_trait::async_trait;
use serde_json::Value;
use shared::models::{Item, Product, Shelf, Warehouse};
use shared::response::ItemsEnvelope;

use super::InventoryApi;
use crate::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};

/// Inventory service over REST
#[derive(Debug, Clone)]
pub struct RestInventoryApi<H = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> RestInventoryApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }
}

#[async_trait]
impl<H: HttpClient> InventoryApi for RestInventoryApi<H> {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.http.get("productos/").await
    }

    async fn create_product(&self, product: &Product) -> ClientResult<()> {
        let _: Value = self.http.post("productos/", product).await?;
        Ok(())
    }

    async fn update_product(&self, barcode: &str, product: &Product) -> ClientResult<()> {
        let _: Value = self.http.put(&format!("productos/{barcode}"), product).await?;
        Ok(())
    }

    async fn delete_product(&self, barcode: &str) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("productos/{barcode}")).await?;
        Ok(())
    }

    async fn list_warehouses(&self) -> ClientResult<Vec<Warehouse>> {
        self.http.get("bodegas/").await
    }

    async fn create_warehouse(&self, warehouse: &Warehouse) -> ClientResult<()> {
        let _: Value = self.http.post("bodegas/", warehouse).await?;
        Ok(())
    }

    async fn delete_warehouse(&self, warehouse_id: &str) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("bodegas/{warehouse_id}")).await?;
        Ok(())
    }

    async fn list_shelves(&self, warehouse_id: &str) -> ClientResult<Vec<Shelf>> {
        self.http.get(&format!("estanterias/{warehouse_id}")).await
    }

    async fn create_shelf(&self, warehouse_id: &str, shelf: &Shelf) -> ClientResult<()> {
        let _: Value = self
            .http
            .post(&format!("estanterias/{warehouse_id}"), shelf)
            .await?;
        Ok(())
    }

    async fn delete_shelf(&self, warehouse_id: &str, shelf_id: &str) -> ClientResult<()> {
        let _: Value = self
            .http
            .delete(&format!("estanterias/{warehouse_id}/{shelf_id}"))
            .await?;
        Ok(())
    }

    async fn list_items(&self) -> ClientResult<Vec<Item>> {
        self.http.get("items/").await
    }

    async fn create_item(&self, item: &Item) -> ClientResult<()> {
        let _: Value = self.http.post("items/", item).await?;
        Ok(())
    }

    async fn delete_item(&self, sku: &str) -> ClientResult<()> {
        let _: Value = self.http.delete(&format!("items/{sku}")).await?;
        Ok(())
    }

    async fn items_by_product_in_warehouse(
        &self,
        product_id: &str,
        warehouse_id: &str,
    ) -> ClientResult<Vec<Item>> {
        let envelope: ItemsEnvelope = self
            .http
            .get_with_query(
                "items/productoBodega",
                &[("codigo_barras", product_id), ("bodega_id", warehouse_id)],
            )
            .await?;
        Ok(envelope.items)
    }

    async fn items_on_shelf(&self, warehouse_id: &str, shelf_id: &str) -> ClientResult<Vec<Item>> {
        let envelope: ItemsEnvelope = self
            .http
            .get_with_query(
                "items/estanteria/todos",
                &[("bodega_id", warehouse_id), ("numero_estanteria", shelf_id)],
            )
            .await?;
        Ok(envelope.items)
    }
}
