//! Tax Repository

use super::{BaseRepository, HotelInfoRepository, RepoError, RepoResult};
use crate::db::models::{Tax, TaxCreate, TaxScope, TaxUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "tax";

#[derive(Clone)]
pub struct TaxRepository {
    base: BaseRepository,
}

impl TaxRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all taxes
    pub async fn find_all(&self) -> RepoResult<Vec<Tax>> {
        let taxes: Vec<Tax> = self
            .base
            .db()
            .query("SELECT * FROM tax ORDER BY name")
            .await?
            .take(0)?;
        Ok(taxes)
    }

    /// Find taxes by scope (e.g. only sale taxes, the room domain)
    pub async fn find_by_scope(&self, scope: TaxScope) -> RepoResult<Vec<Tax>> {
        let taxes: Vec<Tax> = self
            .base
            .db()
            .query("SELECT * FROM tax WHERE scope = $scope ORDER BY name")
            .bind(("scope", scope))
            .await?
            .take(0)?;
        Ok(taxes)
    }

    /// Find tax by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Tax>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let tax: Option<Tax> = self.base.db().select(thing).await?;
        Ok(tax)
    }

    /// Create a new tax
    pub async fn create(&self, data: TaxCreate) -> RepoResult<Tax> {
        let tax = Tax {
            id: None,
            name: data.name,
            rate: data.rate,
            scope: data.scope,
        };
        let created: Option<Tax> = self.base.db().create(TABLE).content(tax).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create tax".to_string()))
    }

    /// Update a tax
    pub async fn update(&self, id: &str, data: TaxUpdate) -> RepoResult<Tax> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Tax {} not found", id)))?;

        let updated: Option<Tax> = self.base.db().update(thing).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Tax {} not found", id)))
    }

    /// Hard delete a tax
    ///
    /// Refused while rooms still reference it or while it is configured as
    /// the default sale tax, so room tax links and the creation-time
    /// defaulting path never dangle.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        let mut result = self
            .base
            .db()
            .query("SELECT count() AS total FROM room WHERE taxes CONTAINS $tax GROUP ALL")
            .bind(("tax", thing.clone()))
            .await?;
        let counts: Vec<serde_json::Value> = result.take(0)?;
        let in_use = counts
            .first()
            .and_then(|v| v.get("total"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        if in_use > 0 {
            return Err(RepoError::Validation(
                "Cannot delete a tax referenced by rooms".into(),
            ));
        }

        let info = HotelInfoRepository::new(self.base.db().clone()).get().await?;
        if info.and_then(|i| i.default_sale_tax).as_ref() == Some(&thing) {
            return Err(RepoError::Validation(
                "Cannot delete the configured default sale tax".into(),
            ));
        }

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
