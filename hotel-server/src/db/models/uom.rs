//! Unit of Measure Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Unit of measure entity
///
/// A canonical "unit" record is seeded at startup and used as the room
/// default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Uom {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    /// Stable lookup code (e.g. "unit")
    pub code: String,
}

/// Create uom payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UomCreate {
    pub name: String,
    pub code: String,
}

/// Update uom payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UomUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
