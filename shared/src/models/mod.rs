//! Data models
//!
//! Shared between the client core and anything rendering it. Field names
//! follow the inventory and audit services' JSON through serde renames.

pub mod audit;
pub mod item;
pub mod product;
pub mod warehouse;

// Re-exports
pub use audit::*;
pub use item::*;
pub use product::*;
pub use warehouse::*;
