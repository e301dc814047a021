//! Hotel Info Model (Singleton)
//!
//! 酒店信息，每个部署只有一条记录

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Hotel info entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelInfo {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Configured default sale tax, inherited by new rooms
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub default_sale_tax: Option<RecordId>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl Default for HotelInfo {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            address: String::new(),
            phone: None,
            email: None,
            website: None,
            default_sale_tax: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Update hotel info payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HotelInfoUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub default_sale_tax: Option<RecordId>,
}
