//! Hotel Info Repository (Singleton)

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{HotelInfo, HotelInfoUpdate};
use crate::utils::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "hotel_info";
const SINGLETON_ID: &str = "main";

#[derive(Clone)]
pub struct HotelInfoRepository {
    base: BaseRepository,
}

impl HotelInfoRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Get or create the singleton hotel info
    pub async fn get_or_create(&self) -> RepoResult<HotelInfo> {
        if let Some(info) = self.get().await? {
            return Ok(info);
        }

        let info = HotelInfo {
            created_at: Some(now_millis()),
            ..HotelInfo::default()
        };

        let created: Option<HotelInfo> = self
            .base
            .db()
            .create((TABLE, SINGLETON_ID))
            .content(info)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create hotel info".to_string()))
    }

    /// Get the singleton hotel info
    pub async fn get(&self) -> RepoResult<Option<HotelInfo>> {
        let info: Option<HotelInfo> = self.base.db().select((TABLE, SINGLETON_ID)).await?;
        Ok(info)
    }

    /// Update hotel info
    pub async fn update(&self, data: HotelInfoUpdate) -> RepoResult<HotelInfo> {
        // Ensure singleton exists
        self.get_or_create().await?;

        let singleton_id = RecordId::from_table_key(TABLE, SINGLETON_ID);
        let _ = self
            .base
            .db()
            .query("UPDATE $id SET updated_at = $now")
            .bind(("id", singleton_id.clone()))
            .bind(("now", now_millis()))
            .await?;

        // default_sale_tax must stay a record link, so bind it explicitly
        if let Some(tax) = data.default_sale_tax.clone() {
            let _ = self
                .base
                .db()
                .query("UPDATE $id SET default_sale_tax = $tax")
                .bind(("id", singleton_id.clone()))
                .bind(("tax", tax))
                .await?;
        }

        let merge = HotelInfoUpdate {
            default_sale_tax: None,
            ..data
        };
        let updated: Option<HotelInfo> =
            self.base.db().update(singleton_id).merge(merge).await?;
        updated.ok_or_else(|| RepoError::Database("Failed to update hotel info".to_string()))
    }
}
