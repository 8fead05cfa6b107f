//! Stock report
//!
//! Lists every warehouse with its shelf occupancy, then resolves the items
//! matching the optional filter given on the command line.
//!
//! Run: cargo run --example stock_report -- [warehouse] [shelf] [product]
//!
//! Service URLs come from `PROVESI_*` variables (a `.env` file is honoured).

use provesi_client::resolver::{ItemFilter, resolve_items};
use provesi_client::{ClientConfig, ProvesiClient, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger("info", false)?;

    let config = ClientConfig::from_env();
    let client = ProvesiClient::connect(&config)?;

    let warehouses = client.directory().list_warehouses().await?;
    println!("\nWarehouses ({})", warehouses.len());
    println!("==============");
    for warehouse in &warehouses {
        let id = warehouse.id.as_deref().unwrap_or("-");
        println!("{id}  {} / {}", warehouse.city, warehouse.address);
        for shelf in &warehouse.shelves {
            let capacity = shelf.capacity();
            let flag = if capacity.is_over() {
                "  OVER"
            } else if capacity.is_full() {
                "  FULL"
            } else {
                ""
            };
            println!(
                "    {:<10} {:<12} {:>5}/{:<5} ({:.0}%){flag}",
                shelf.id,
                shelf.area,
                capacity.used,
                capacity.total,
                capacity.ratio() * 100.0
            );
        }
    }

    let mut args = std::env::args().skip(1);
    let filter = ItemFilter::new()
        .warehouse(args.next().unwrap_or_default())
        .shelf(args.next().unwrap_or_default())
        .product(args.next().unwrap_or_default());

    let items = resolve_items(client.inventory().as_ref(), &filter).await?;
    println!("\nItems via {} ({})", filter.strategy().name(), items.len());
    println!("==============");
    for item in &items {
        println!(
            "{:<12} {:<14} {:<8} {:<8} {}",
            item.sku, item.product_id, item.warehouse_id, item.shelf_id, item.state
        );
    }

    Ok(())
}
