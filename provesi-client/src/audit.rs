//! Audit log browsing (read-only)

use std::sync::Arc;

use shared::models::{AuditLog, AuditedService};
use shared::{AppError, ErrorCode, PaginatedResponse};

use crate::ClientResult;
use crate::api::AuditApi;
use crate::notice::Notices;
use crate::sequence::{Outcome, RequestSequencer, Ticket};

const DEFAULT_LIMIT: u32 = 10;

/// Pending page load
#[derive(Debug, Clone)]
pub struct AuditQuery {
    pub page: u32,
    pub limit: u32,
    pub service_id: Option<String>,
    ticket: Ticket,
}

impl AuditQuery {
    pub async fn run(&self, api: &dyn AuditApi) -> ClientResult<PaginatedResponse<AuditLog>> {
        self.ticket
            .run(api.list_logs(self.page, self.limit, self.service_id.as_deref()))
            .await
    }
}

/// Paged audit log view with an optional service filter
pub struct AuditBrowser {
    api: Arc<dyn AuditApi>,
    page: u32,
    limit: u32,
    service_id: Option<String>,
    current: Option<PaginatedResponse<AuditLog>>,
    /// Page count for the current filter and limit, once known
    total_pages: Option<u32>,
    services: Vec<AuditedService>,
    queries: RequestSequencer,
    notices: Notices,
}

impl std::fmt::Debug for AuditBrowser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditBrowser")
            .field("page", &self.page)
            .field("limit", &self.limit)
            .field("service_id", &self.service_id)
            .finish()
    }
}

impl AuditBrowser {
    pub fn new(api: Arc<dyn AuditApi>) -> Self {
        Self {
            api,
            page: 1,
            limit: DEFAULT_LIMIT,
            service_id: None,
            current: None,
            total_pages: None,
            services: Vec::new(),
            queries: RequestSequencer::new(),
            notices: Notices::default(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn logs(&self) -> &[AuditLog] {
        self.current
            .as_ref()
            .map(|p| p.data.as_slice())
            .unwrap_or_default()
    }

    pub fn current(&self) -> Option<&PaginatedResponse<AuditLog>> {
        self.current.as_ref()
    }

    pub fn services(&self) -> &[AuditedService] {
        &self.services
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    /// Pick the page for the next load, within the last known page count
    pub fn set_page(&mut self, page: u32) -> ClientResult<()> {
        if page == 0 {
            return Err(invalid_pagination("page starts at 1").into());
        }
        if let Some(total_pages) = self.total_pages
            && total_pages > 0
            && page > total_pages
        {
            return Err(invalid_pagination(format!(
                "page {page} is past the last page ({total_pages})"
            ))
            .into());
        }
        self.page = page;
        Ok(())
    }

    pub fn set_limit(&mut self, limit: u32) -> ClientResult<()> {
        if limit == 0 {
            return Err(invalid_pagination("limit must be positive").into());
        }
        self.limit = limit;
        self.page = 1;
        self.total_pages = None;
        Ok(())
    }

    /// Filter by audited service; back to the first page
    pub fn set_service(&mut self, service_id: Option<String>) {
        self.service_id = service_id.filter(|s| !s.trim().is_empty());
        self.page = 1;
        self.total_pages = None;
    }

    pub fn has_next(&self) -> bool {
        self.current.as_ref().is_some_and(PaginatedResponse::has_next)
    }

    pub fn begin_load(&mut self) -> AuditQuery {
        self.query_for(self.page)
    }

    fn query_for(&mut self, page: u32) -> AuditQuery {
        AuditQuery {
            page,
            limit: self.limit,
            service_id: self.service_id.clone(),
            ticket: self.queries.issue(),
        }
    }

    pub fn apply(
        &mut self,
        query: &AuditQuery,
        result: ClientResult<PaginatedResponse<AuditLog>>,
    ) -> Outcome {
        if !self.queries.settle(&query.ticket) {
            return Outcome::Discarded;
        }
        match result {
            Ok(page) => {
                self.page = query.page;
                self.total_pages = Some(page.total_pages);
                self.current = Some(page);
                Outcome::Applied
            }
            Err(e) if e.is_superseded() => Outcome::Discarded,
            Err(e) => {
                self.notices.push_error("Loading audit logs", &e);
                Outcome::Applied
            }
        }
    }

    pub async fn refresh(&mut self) -> Outcome {
        let query = self.begin_load();
        let result = query.run(self.api.as_ref()).await;
        self.apply(&query, result)
    }

    /// Load the page after the current one. The position only moves once
    /// that page has arrived.
    pub async fn next_page(&mut self) -> Outcome {
        if !self.has_next() {
            return Outcome::Discarded;
        }
        let query = self.query_for(self.page + 1);
        let result = query.run(self.api.as_ref()).await;
        self.apply(&query, result)
    }

    pub async fn load_services(&mut self) -> ClientResult<()> {
        match self.api.list_services().await {
            Ok(services) => {
                self.services = services;
                Ok(())
            }
            Err(e) => {
                self.notices.push_error("Loading audited services", &e);
                Err(e)
            }
        }
    }
}

fn invalid_pagination(msg: impl Into<String>) -> AppError {
    AppError::with_message(ErrorCode::InvalidPagination, msg)
}
