//! Client configuration

use std::time::Duration;

use crate::{ClientError, ClientResult};

const DEFAULT_INVENTORY_URL: &str = "http://localhost:3000/api";
const DEFAULT_AUDIT_URL: &str = "http://localhost:3000/audit-api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Endpoints and credentials for the remote services
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Inventory service base URL (products, warehouses, shelves, items)
    pub inventory_url: String,

    /// Order service base URL, same host as inventory behind the gateway
    pub order_url: String,

    /// Audit service base URL
    pub audit_url: String,

    /// Bearer token sent on every request
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Inventory and orders on `api_url`, audit on the default URL
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            order_url: api_url.clone(),
            inventory_url: api_url,
            audit_url: DEFAULT_AUDIT_URL.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load from environment variables (reads `.env` when present)
    ///
    /// - `PROVESI_INVENTORY_URL`
    /// - `PROVESI_ORDER_URL` (defaults to the inventory URL)
    /// - `PROVESI_AUDIT_URL`
    /// - `PROVESI_TOKEN`
    /// - `PROVESI_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let inventory_url = std::env::var("PROVESI_INVENTORY_URL")
            .unwrap_or_else(|_| DEFAULT_INVENTORY_URL.to_string());
        let order_url =
            std::env::var("PROVESI_ORDER_URL").unwrap_or_else(|_| inventory_url.clone());

        Self {
            inventory_url,
            order_url,
            audit_url: std::env::var("PROVESI_AUDIT_URL")
                .unwrap_or_else(|_| DEFAULT_AUDIT_URL.to_string()),
            token: std::env::var("PROVESI_TOKEN").ok().filter(|t| !t.is_empty()),
            timeout: std::env::var("PROVESI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_order_url(mut self, url: impl Into<String>) -> Self {
        self.order_url = url.into();
        self
    }

    pub fn with_audit_url(mut self, url: impl Into<String>) -> Self {
        self.audit_url = url.into();
        self
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Reject configurations that cannot produce a working client
    pub fn validate(&self) -> ClientResult<()> {
        for (name, url) in [
            ("inventory_url", &self.inventory_url),
            ("order_url", &self.order_url),
            ("audit_url", &self.audit_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ClientError::Config(format!(
                    "{name} must be an http(s) URL, got {url:?}"
                )));
            }
        }
        if self.timeout == 0 {
            return Err(ClientError::Config("timeout must be positive".into()));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_URL)
    }
}
