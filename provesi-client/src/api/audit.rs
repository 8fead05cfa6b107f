use async_trait::async_trait;
use shared::PaginatedResponse;
use shared::models::{AuditLog, AuditedService};

use super::AuditApi;
use crate::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};

/// Audit service over REST
#[derive(Debug, Clone)]
pub struct RestAuditApi<H = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> RestAuditApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }
}

#[async_trait]
impl<H: HttpClient> AuditApi for RestAuditApi<H> {
    async fn list_logs(
        &self,
        page: u32,
        limit: u32,
        service_id: Option<&str>,
    ) -> ClientResult<PaginatedResponse<AuditLog>> {
        let page = page.to_string();
        let limit = limit.to_string();
        let mut query = vec![("page", page.as_str()), ("limit", limit.as_str())];
        if let Some(service_id) = service_id {
            query.push(("service_id", service_id));
        }
        let logs: PaginatedResponse<AuditLog> =
            self.http.get_with_query("audit-logs/", &query).await?;
        Ok(logs.normalized())
    }

    async fn list_services(&self) -> ClientResult<Vec<AuditedService>> {
        self.http.get("audited-services/").await
    }
}
