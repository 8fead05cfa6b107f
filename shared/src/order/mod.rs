//! Order domain: status enumeration and order service payloads

mod status;
mod types;

pub use status::OrderStatus;
pub use types::{
    InvoiceData, InvoiceRef, NewOrder, Order, OrderReply, RequestedProduct, StatusChange,
};
