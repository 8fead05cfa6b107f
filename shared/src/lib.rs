//! Shared types for the Provesi inventory client
//!
//! Domain models (products, warehouses, shelves, items, orders, audit logs),
//! response envelopes and the unified error types.

pub mod error;
pub mod models;
pub mod order;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use response::PaginatedResponse;
