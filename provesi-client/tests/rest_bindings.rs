//! REST bindings: paths, query parameters and bodies sent to the services

mod common;

use common::RecordingHttp;
use provesi_client::api::{
    AuditApi, InventoryApi, OrderApi, RestAuditApi, RestInventoryApi, RestOrderApi,
};
use serde_json::json;
use shared::models::Shelf;
use shared::order::{InvoiceData, OrderStatus, StatusChange};

fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_items_on_shelf_query() {
    let http = RecordingHttp::default().reply(
        "items/estanteria/todos",
        json!({"items": [{
            "_id": "I3",
            "estado": "disponible",
            "producto_id": "SKU-001",
            "bodega_id": "BOG-1",
            "estanteria_id": "A-01"
        }]}),
    );
    let api = RestInventoryApi::new(http);

    let items = api.items_on_shelf("BOG-1", "A-01").await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].sku, "I3");
    let call = api.http().last();
    assert_eq!(call.method, "GET");
    assert_eq!(
        call.query,
        query(&[("bodega_id", "BOG-1"), ("numero_estanteria", "A-01")])
    );
}

#[tokio::test]
async fn test_product_in_warehouse_query() {
    let http = RecordingHttp::default().reply("items/productoBodega", json!({"items": []}));
    let api = RestInventoryApi::new(http);

    let items = api
        .items_by_product_in_warehouse("SKU-001", "BOG-1")
        .await
        .unwrap();

    assert!(items.is_empty());
    assert_eq!(
        api.http().last().query,
        query(&[("codigo_barras", "SKU-001"), ("bodega_id", "BOG-1")])
    );
}

#[tokio::test]
async fn test_shelf_paths() {
    let api = RestInventoryApi::new(RecordingHttp::default());

    api.create_shelf("BOG-1", &Shelf::new("A-03", "Sur", 10))
        .await
        .unwrap();
    api.delete_shelf("BOG-1", "A-03").await.unwrap();

    let calls = api.http().calls();
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "estanterias/BOG-1");
    assert_eq!(
        calls[0].body,
        Some(json!({
            "_id": "A-03",
            "area_bodega": "Sur",
            "capacidad_total": 10,
            "capacidad_utilizada": 0
        }))
    );
    assert_eq!(calls[1].method, "DELETE");
    assert_eq!(calls[1].path, "estanterias/BOG-1/A-03");
}

#[tokio::test]
async fn test_status_change_body() {
    let http = RecordingHttp::default().reply(
        "pedidos/7",
        json!({
            "mensaje": "Estado actualizado",
            "codigo": "OK",
            "pedido": {
                "id": 7,
                "estado": "Empacado x despachar",
                "items": ["I1"],
                "operario": "ana",
                "cliente": 1,
                "factura": 31
            }
        }),
    );
    let api = RestOrderApi::new(http);
    let change = StatusChange {
        order_id: 7,
        target: OrderStatus::EmpacadoPorDespachar,
        invoice: Some(InvoiceData::new("Tarjeta", "123456789", "COMP-001")),
    };

    let order = api.change_status(&change).await.unwrap();

    assert_eq!(order.status, OrderStatus::EmpacadoPorDespachar);
    let call = api.http().last();
    assert_eq!(call.method, "PUT");
    assert_eq!(call.path, "pedidos/7");
    assert_eq!(
        call.body,
        Some(json!({
            "pedido_id": 7,
            "nuevo_estado": "Empacado x despachar",
            "datos_factura": {
                "metodo_pago": "Tarjeta",
                "num_cuenta": "123456789",
                "comprobante": "COMP-001"
            }
        }))
    );
}

#[tokio::test]
async fn test_status_change_without_invoice_omits_field() {
    let http = RecordingHttp::default().reply(
        "pedidos/3",
        json!({"pedido": {"id": 3, "estado": "Anulado"}}),
    );
    let api = RestOrderApi::new(http);
    let change = StatusChange {
        order_id: 3,
        target: OrderStatus::Anulado,
        invoice: None,
    };

    api.change_status(&change).await.unwrap();

    assert_eq!(
        api.http().last().body,
        Some(json!({"pedido_id": 3, "nuevo_estado": "Anulado"}))
    );
}

#[tokio::test]
async fn test_verify_integrity_reply_shapes() {
    let http = RecordingHttp::default()
        .reply("pedidos/1/verificar-integridad", json!(true))
        .reply("pedidos/2/verificar-integridad", json!({"integridad": false}))
        .reply("pedidos/3/verificar-integridad", json!("ok"));
    let api = RestOrderApi::new(http);

    assert!(api.verify_integrity(1).await.unwrap());
    assert!(!api.verify_integrity(2).await.unwrap());
    assert!(api.verify_integrity(3).await.is_err());
}

#[tokio::test]
async fn test_audit_logs_query() {
    let http = RecordingHttp::default().reply(
        "audit-logs/",
        json!({"data": [], "total": 0, "page": 2, "limit": 5, "total_pages": 0}),
    );
    let api = RestAuditApi::new(http);

    let page = api.list_logs(2, 5, Some("2")).await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(
        api.http().last().query,
        query(&[("page", "2"), ("limit", "5"), ("service_id", "2")])
    );

    api.list_logs(1, 10, None).await.unwrap();
    assert_eq!(
        api.http().last().query,
        query(&[("page", "1"), ("limit", "10")])
    );
}
