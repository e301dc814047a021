//! Amenity Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Amenity entity (room feature/facility)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Create amenity payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmenityCreate {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Update amenity payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmenityUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
