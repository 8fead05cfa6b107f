//! In-memory fakes of the remote services

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use provesi_client::api::{AuditApi, InventoryApi, OrderApi};
use provesi_client::{ClientError, ClientResult, HttpClient};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::order::{InvoiceRef, NewOrder, Order, OrderStatus, StatusChange};
use shared::{ErrorCode, PaginatedResponse};
use shared::models::{AuditLog, AuditedService, Item, Product, Shelf, Warehouse};

fn server_error() -> ClientError {
    ClientError::Api {
        status: 500,
        code: ErrorCode::InternalError,
        message: "boom".into(),
    }
}

// ============================================================================
// Inventory
// ============================================================================

#[derive(Default)]
pub struct FakeInventory {
    pub products: Mutex<Vec<Product>>,
    pub warehouses: Mutex<Vec<Warehouse>>,
    pub items: Mutex<Vec<Item>>,
    calls: Mutex<Vec<String>>,
    failing: AtomicBool,
}

impl FakeInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_warehouse(self, warehouse: Warehouse) -> Self {
        self.warehouses.lock().unwrap().push(warehouse);
        self
    }

    pub fn with_items(self, items: Vec<Item>) -> Self {
        self.items.lock().unwrap().extend(items);
        self
    }

    /// Every following call fails with a server error
    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.split('(').next() == Some(op))
            .count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: String) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(())
    }

    fn with_shelves<T>(
        &self,
        warehouse_id: &str,
        f: impl FnOnce(&mut Vec<Shelf>) -> T,
    ) -> ClientResult<T> {
        let mut warehouses = self.warehouses.lock().unwrap();
        let warehouse = warehouses
            .iter_mut()
            .find(|w| w.id.as_deref() == Some(warehouse_id))
            .ok_or_else(|| ClientError::NotFound("Bodega no encontrada".into()))?;
        Ok(f(&mut warehouse.shelves))
    }
}

#[async_trait]
impl InventoryApi for FakeInventory {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.record("list_products()".into())?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn create_product(&self, product: &Product) -> ClientResult<()> {
        self.record(format!("create_product({})", product.barcode))?;
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn update_product(&self, barcode: &str, product: &Product) -> ClientResult<()> {
        self.record(format!("update_product({barcode})"))?;
        let mut products = self.products.lock().unwrap();
        let slot = products
            .iter_mut()
            .find(|p| p.barcode == barcode)
            .ok_or_else(|| ClientError::NotFound(barcode.into()))?;
        *slot = product.clone();
        Ok(())
    }

    async fn delete_product(&self, barcode: &str) -> ClientResult<()> {
        self.record(format!("delete_product({barcode})"))?;
        self.products.lock().unwrap().retain(|p| p.barcode != barcode);
        Ok(())
    }

    async fn list_warehouses(&self) -> ClientResult<Vec<Warehouse>> {
        self.record("list_warehouses()".into())?;
        Ok(self.warehouses.lock().unwrap().clone())
    }

    async fn create_warehouse(&self, warehouse: &Warehouse) -> ClientResult<()> {
        self.record(format!("create_warehouse({})", warehouse.city))?;
        let mut warehouses = self.warehouses.lock().unwrap();
        let id = format!("W{}", warehouses.len() + 1);
        warehouses.push(warehouse.clone().with_id(id));
        Ok(())
    }

    async fn delete_warehouse(&self, warehouse_id: &str) -> ClientResult<()> {
        self.record(format!("delete_warehouse({warehouse_id})"))?;
        self.warehouses
            .lock()
            .unwrap()
            .retain(|w| w.id.as_deref() != Some(warehouse_id));
        Ok(())
    }

    async fn list_shelves(&self, warehouse_id: &str) -> ClientResult<Vec<Shelf>> {
        self.record(format!("list_shelves({warehouse_id})"))?;
        self.with_shelves(warehouse_id, |shelves| shelves.clone())
    }

    async fn create_shelf(&self, warehouse_id: &str, shelf: &Shelf) -> ClientResult<()> {
        self.record(format!("create_shelf({warehouse_id},{})", shelf.id))?;
        self.with_shelves(warehouse_id, |shelves| shelves.push(shelf.clone()))
    }

    async fn delete_shelf(&self, warehouse_id: &str, shelf_id: &str) -> ClientResult<()> {
        self.record(format!("delete_shelf({warehouse_id},{shelf_id})"))?;
        self.with_shelves(warehouse_id, |shelves| shelves.retain(|s| s.id != shelf_id))
    }

    async fn list_items(&self) -> ClientResult<Vec<Item>> {
        self.record("list_items()".into())?;
        Ok(self.items.lock().unwrap().clone())
    }

    async fn create_item(&self, item: &Item) -> ClientResult<()> {
        self.record(format!("create_item({})", item.sku))?;
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn delete_item(&self, sku: &str) -> ClientResult<()> {
        self.record(format!("delete_item({sku})"))?;
        self.items.lock().unwrap().retain(|i| i.sku != sku);
        Ok(())
    }

    async fn items_by_product_in_warehouse(
        &self,
        product_id: &str,
        warehouse_id: &str,
    ) -> ClientResult<Vec<Item>> {
        self.record(format!(
            "items_by_product_in_warehouse({product_id},{warehouse_id})"
        ))?;
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.product_id == product_id && i.warehouse_id == warehouse_id)
            .cloned()
            .collect())
    }

    async fn items_on_shelf(&self, warehouse_id: &str, shelf_id: &str) -> ClientResult<Vec<Item>> {
        self.record(format!("items_on_shelf({warehouse_id},{shelf_id})"))?;
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.warehouse_id == warehouse_id && i.shelf_id == shelf_id)
            .cloned()
            .collect())
    }
}

// ============================================================================
// Orders
// ============================================================================

#[derive(Default)]
pub struct FakeOrders {
    pub orders: Mutex<Vec<Order>>,
    pub changes: Mutex<Vec<StatusChange>>,
    calls: Mutex<Vec<String>>,
    failing: AtomicBool,
    integrity: Mutex<HashMap<i64, bool>>,
}

impl FakeOrders {
    pub fn with_orders(orders: Vec<Order>) -> Self {
        let fake = Self::default();
        *fake.orders.lock().unwrap() = orders;
        fake
    }

    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_integrity(&self, order_id: i64, valid: bool) {
        self.integrity.lock().unwrap().insert(order_id, valid);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == op).count()
    }

    fn record(&self, op: &str) -> ClientResult<()> {
        self.calls.lock().unwrap().push(op.to_string());
        if self.failing.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(())
    }
}

#[async_trait]
impl OrderApi for FakeOrders {
    async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.record("list_orders")?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn get_order(&self, order_id: i64) -> ClientResult<Order> {
        self.record("get_order")?;
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == Some(order_id))
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("pedido {order_id}")))
    }

    async fn create_order(&self, order: &NewOrder) -> ClientResult<Order> {
        self.record("create_order")?;
        let mut orders = self.orders.lock().unwrap();
        let created = Order {
            id: Some(orders.len() as i64 + 100),
            status: OrderStatus::Alistamiento,
            items: order.items.clone(),
            operator: order.operator.clone(),
            customer_id: Some(order.customer_id),
            warehouse_id: Some(order.warehouse_id.clone()),
            requested_products: Some(order.requested_products.clone()),
            invoice: None,
            integrity_hash: Some("abc".into()),
        };
        orders.push(created.clone());
        Ok(created)
    }

    async fn change_status(&self, change: &StatusChange) -> ClientResult<Order> {
        self.record("change_status")?;
        self.changes.lock().unwrap().push(change.clone());
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.id == Some(change.order_id))
            .ok_or_else(|| ClientError::NotFound("Pedido no encontrado".into()))?;
        order.status = change.target;
        if let Some(invoice) = &change.invoice {
            order.invoice = Some(InvoiceRef::Record(invoice.clone()));
        }
        Ok(order.clone())
    }

    async fn verify_integrity(&self, order_id: i64) -> ClientResult<bool> {
        self.record("verify_integrity")?;
        Ok(self
            .integrity
            .lock()
            .unwrap()
            .get(&order_id)
            .copied()
            .unwrap_or(true))
    }
}

pub fn order(id: i64, status: OrderStatus, operator: &str) -> Order {
    Order {
        id: Some(id),
        status,
        items: vec![format!("I{id}")],
        operator: operator.into(),
        customer_id: Some(1),
        warehouse_id: Some("BOG-1".into()),
        requested_products: None,
        invoice: None,
        integrity_hash: None,
    }
}

// ============================================================================
// Audit
// ============================================================================

#[derive(Default)]
pub struct FakeAudit {
    pub logs: Mutex<Vec<AuditLog>>,
    pub queries: Mutex<Vec<(u32, u32, Option<String>)>>,
    failing: AtomicBool,
}

impl FakeAudit {
    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl AuditApi for FakeAudit {
    async fn list_logs(
        &self,
        page: u32,
        limit: u32,
        service_id: Option<&str>,
    ) -> ClientResult<PaginatedResponse<AuditLog>> {
        self.queries
            .lock()
            .unwrap()
            .push((page, limit, service_id.map(str::to_string)));
        if self.failing.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        let logs: Vec<AuditLog> = self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|l| service_id.is_none_or(|s| l.audited_service_id == s))
            .cloned()
            .collect();
        let total = logs.len() as u64;
        let start = ((page - 1) * limit) as usize;
        let data = logs.into_iter().skip(start).take(limit as usize).collect();
        Ok(PaginatedResponse::new(data, total, page, limit))
    }

    async fn list_services(&self) -> ClientResult<Vec<AuditedService>> {
        Ok(vec![AuditedService {
            id: Some("2".into()),
            name: "inventario".into(),
        }])
    }
}

// ============================================================================
// HTTP
// ============================================================================

/// One recorded HTTP call
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// HttpClient answering canned JSON per path and recording every call
#[derive(Default)]
pub struct RecordingHttp {
    replies: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<Recorded>>,
}

impl RecordingHttp {
    pub fn reply(self, path: &str, value: Value) -> Self {
        self.replies.lock().unwrap().insert(path.to_string(), value);
        self
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.calls.lock().unwrap().last().cloned().unwrap()
    }

    fn answer<T: DeserializeOwned>(&self, call: Recorded) -> ClientResult<T> {
        let reply = self
            .replies
            .lock()
            .unwrap()
            .get(&call.path)
            .cloned()
            .unwrap_or(Value::Null);
        self.calls.lock().unwrap().push(call);
        Ok(serde_json::from_value(reply)?)
    }
}

#[async_trait]
impl HttpClient for RecordingHttp {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.answer(Recorded {
            method: "GET",
            path: path.into(),
            query: vec![],
            body: None,
        })
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        self.answer(Recorded {
            method: "GET",
            path: path.into(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: None,
        })
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.answer(Recorded {
            method: "POST",
            path: path.into(),
            query: vec![],
            body: Some(serde_json::to_value(body)?),
        })
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.answer(Recorded {
            method: "PUT",
            path: path.into(),
            query: vec![],
            body: Some(serde_json::to_value(body)?),
        })
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.answer(Recorded {
            method: "DELETE",
            path: path.into(),
            query: vec![],
            body: None,
        })
    }

    fn token(&self) -> Option<&str> {
        None
    }
}
