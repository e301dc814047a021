//! Floor Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Floor entity, groups rooms and carries the responsible user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    /// Assigned responsible user reference
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub user: Option<RecordId>,
}

/// Create floor payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorCreate {
    pub name: String,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub user: Option<RecordId>,
}

/// Update floor payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub user: Option<RecordId>,
}
