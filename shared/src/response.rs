//! Response envelopes used by the remote services

use serde::{Deserialize, Serialize};

use crate::models::Item;

/// Paginated response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Page content
    pub data: Vec<T>,
    /// Total record count
    pub total: u64,
    /// Current page (starting at 1)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total page count
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = Self::pages_for(total, limit);
        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    fn pages_for(total: u64, limit: u32) -> u32 {
        if limit > 0 {
            total.div_ceil(u64::from(limit)) as u32
        } else {
            1
        }
    }

    /// Fill `total_pages` when the service omitted it
    pub fn normalized(mut self) -> Self {
        if self.total_pages == 0 {
            self.total_pages = Self::pages_for(self.total, self.limit);
        }
        self
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `{ "items": [...] }` reply of the scoped item queries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemsEnvelope {
    #[serde(default)]
    pub items: Vec<Item>,
}
