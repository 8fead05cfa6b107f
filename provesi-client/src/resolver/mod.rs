//! Inventory Location Resolver
//!
//! Picks the most specific remote query for a partial item filter and keeps
//! the warehouse to shelf cascade consistent. The pure rules
//! ([`ItemFilter::strategy`], [`next_shelf_list`]) are usable on their own;
//! [`ItemFilterPanel`] and [`ItemDraft`] are the two stateful owners.

mod cascade;
mod draft;
mod filter;
mod panel;

pub use cascade::{ShelfCascade, ShelfListPlan, ShelfRequest, next_shelf_list};
pub use draft::ItemDraft;
pub use filter::{ItemFilter, ResolutionStrategy, resolve_items};
pub use panel::{ItemFilterPanel, ItemQuery};
