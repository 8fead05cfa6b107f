//! Provesi Client - warehouse and order management core
//!
//! Talks to the inventory, order and audit services over HTTP and keeps the
//! local state a front end renders: warehouses and shelves, filtered item
//! sets, the product catalog, the order list and audit pages.

pub mod api;
pub mod audit;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod location;
pub mod logger;
pub mod notice;
pub mod orders;
pub mod resolver;
pub mod sequence;

pub use client::ProvesiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use location::LocationDirectory;
pub use notice::{Notice, NoticeLevel, Notices};
pub use sequence::{Outcome, RequestSequencer, Ticket};

// Re-export shared types for convenience
pub use shared::models::{
    AuditLog, AuditedService, Item, ItemState, Product, ProductAttributes, Shelf, ShelfCapacity,
    Warehouse,
};
pub use shared::order::{InvoiceData, NewOrder, Order, OrderStatus};
pub use shared::{AppError, ErrorCode};
