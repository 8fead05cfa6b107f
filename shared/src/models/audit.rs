//! Audit Log Model (read-only, owned by the audit service)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Kind of audited action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Create,
    Read,
    Update,
    Delete,
    Login,
    Logout,
}

/// Audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    #[serde(alias = "_id")]
    pub id: serde_json::Value,
    pub timestamp: NaiveDateTime,
    /// Actor
    pub user_id: String,
    #[serde(alias = "audit_service_id")]
    pub audited_service_id: String,
    pub action: AuditAction,
    pub description: String,
    /// Target entity kind, e.g. `PRODUCT`
    pub entity: String,
    pub entity_id: String,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    /// Origin IP
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub registered_at: Option<NaiveDateTime>,
}

/// Service known to the audit service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditedService {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub name: String,
}
