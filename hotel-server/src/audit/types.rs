//! Audit log type definitions
//!
//! Append-only change history. Entries are hash-chained with SHA-256 so the
//! trail is verifiable after the fact.

use serde::{Deserialize, Serialize};

/// Audit action type (enum, not free text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    // ═══ System lifecycle ═══
    SystemStartup,
    SystemShutdown,

    // ═══ Rooms ═══
    RoomCreated,
    RoomUpdated,
    RoomDeleted,

    // ═══ Configuration ═══
    HotelInfoChanged,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One tracked-field change captured on update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub old: serde_json::Value,
    pub new: serde_json::Value,
}

/// Audit log entry (immutable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Globally increasing sequence number
    pub id: u64,
    /// Unix milliseconds
    pub timestamp: i64,
    pub action: AuditAction,
    /// Resource type ("room", "hotel_info", "system")
    pub resource_type: String,
    /// Resource id ("room:xxx")
    pub resource_id: String,
    /// Structured details (field changes, payload snapshot)
    pub details: serde_json::Value,
    /// Hash of the previous entry
    pub prev_hash: String,
    /// SHA-256 over prev_hash + all fields
    pub curr_hash: String,
}

/// Audit log query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct AuditQuery {
    /// From timestamp (Unix ms, inclusive)
    pub from: Option<i64>,
    /// To timestamp (Unix ms, inclusive)
    pub to: Option<i64>,
    pub action: Option<AuditAction>,
    pub resource_type: Option<String>,
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for AuditQuery {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            action: None,
            resource_type: None,
            offset: 0,
            limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    50
}

/// Audit log list response
#[derive(Debug, Serialize)]
pub struct AuditListResponse {
    pub items: Vec<AuditEntry>,
    pub total: u64,
}

/// Chain verification result
#[derive(Debug, Serialize)]
pub struct AuditChainVerification {
    pub total_entries: u64,
    pub chain_intact: bool,
    pub breaks: Vec<AuditChainBreak>,
}

/// A break point in the hash chain
#[derive(Debug, Serialize)]
pub struct AuditChainBreak {
    pub entry_id: u64,
    pub expected_prev_hash: String,
    pub actual_prev_hash: String,
}
