//! Tax Model

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Where a tax applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxScope {
    Sale,
    Purchase,
}

/// Tax entity
///
/// Rooms may only reference taxes with [`TaxScope::Sale`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tax {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    /// Rate in percent (e.g. 10 = 10%)
    pub rate: Decimal,
    pub scope: TaxScope,
}

/// Create tax payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxCreate {
    pub name: String,
    pub rate: Decimal,
    pub scope: TaxScope,
}

/// Update tax payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<TaxScope>,
}
