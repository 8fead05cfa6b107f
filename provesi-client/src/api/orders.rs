use async_trait::async_trait;
use serde_json::Value;
use shared::order::{NewOrder, Order, OrderReply, StatusChange};

use super::OrderApi;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientError, ClientResult};

/// Order service over REST
#[derive(Debug, Clone)]
pub struct RestOrderApi<H = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> RestOrderApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }
}

/// The integrity endpoint answers a bare boolean; older deployments wrap it
fn integrity_flag(reply: &Value) -> Option<bool> {
    match reply {
        Value::Bool(b) => Some(*b),
        Value::Object(map) => ["integridad", "valido", "verificado"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_bool)),
        _ => None,
    }
}

#[async_trait]
impl<H: HttpClient> OrderApi for RestOrderApi<H> {
    async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.http.get("pedidos/").await
    }

    async fn get_order(&self, order_id: i64) -> ClientResult<Order> {
        self.http.get(&format!("pedidos/{order_id}")).await
    }

    async fn create_order(&self, order: &NewOrder) -> ClientResult<Order> {
        let reply: OrderReply = self.http.post("pedidos/", order).await?;
        tracing::debug!(code = %reply.code, message = %reply.message, "Order created");
        Ok(reply.order)
    }

    async fn change_status(&self, change: &StatusChange) -> ClientResult<Order> {
        let reply: OrderReply = self
            .http
            .put(&format!("pedidos/{}", change.order_id), change)
            .await?;
        tracing::debug!(code = %reply.code, message = %reply.message, "Order status changed");
        Ok(reply.order)
    }

    async fn verify_integrity(&self, order_id: i64) -> ClientResult<bool> {
        let reply: Value = self
            .http
            .get(&format!("pedidos/{order_id}/verificar-integridad"))
            .await?;
        integrity_flag(&reply).ok_or_else(|| {
            ClientError::InvalidResponse(format!("unexpected integrity reply: {reply}"))
        })
    }
}
