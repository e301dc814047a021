//! Unit of Measure Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Uom, UomCreate, UomUpdate};
use std::sync::OnceLock;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "uom";

/// Key of the canonical default unit, seeded at startup
pub const DEFAULT_UOM_KEY: &str = "unit";

// Process-wide cache of the default uom reference. The referenced record
// never changes within a process, so no invalidation path exists.
static DEFAULT_UOM: OnceLock<RecordId> = OnceLock::new();

#[derive(Clone)]
pub struct UomRepository {
    base: BaseRepository,
}

impl UomRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all units of measure
    pub async fn find_all(&self) -> RepoResult<Vec<Uom>> {
        let uoms: Vec<Uom> = self
            .base
            .db()
            .query("SELECT * FROM uom ORDER BY name")
            .await?
            .take(0)?;
        Ok(uoms)
    }

    /// Find uom by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Uom>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let uom: Option<Uom> = self.base.db().select(thing).await?;
        Ok(uom)
    }

    /// Create a new uom
    pub async fn create(&self, data: UomCreate) -> RepoResult<Uom> {
        let uom = Uom {
            id: None,
            name: data.name,
            code: data.code,
        };
        let created: Option<Uom> = self.base.db().create(TABLE).content(uom).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create uom".to_string()))
    }

    /// Update a uom
    pub async fn update(&self, id: &str, data: UomUpdate) -> RepoResult<Uom> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Uom {} not found", id)))?;

        let updated: Option<Uom> = self.base.db().update(thing).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Uom {} not found", id)))
    }

    /// Hard delete a uom
    ///
    /// The canonical default is never deletable, and neither is a uom still
    /// referenced by rooms.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        if thing == RecordId::from_table_key(TABLE, DEFAULT_UOM_KEY) {
            return Err(RepoError::Validation(
                "Cannot delete the default unit of measure".into(),
            ));
        }

        let mut result = self
            .base
            .db()
            .query("SELECT count() AS total FROM room WHERE uom = $uom GROUP ALL")
            .bind(("uom", thing.clone()))
            .await?;
        let counts: Vec<serde_json::Value> = result.take(0)?;
        let in_use = counts
            .first()
            .and_then(|v| v.get("total"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        if in_use > 0 {
            return Err(RepoError::Validation(
                "Cannot delete a unit of measure used by rooms".into(),
            ));
        }

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }

    /// Default unit-of-measure accessor
    ///
    /// Resolves the canonical "unit" record once and caches the reference for
    /// the process lifetime. Used as the default-value supplier for the room
    /// uom field at record-creation time.
    pub async fn default_uom(&self) -> RepoResult<RecordId> {
        if let Some(id) = DEFAULT_UOM.get() {
            return Ok(id.clone());
        }

        let uom: Option<Uom> = self
            .base
            .db()
            .select((TABLE, DEFAULT_UOM_KEY))
            .await?;
        let uom = uom.ok_or_else(|| {
            RepoError::NotFound("Default unit of measure is not seeded".to_string())
        })?;
        let id = uom
            .id
            .unwrap_or_else(|| RecordId::from_table_key(TABLE, DEFAULT_UOM_KEY));

        Ok(DEFAULT_UOM.get_or_init(|| id).clone())
    }

    /// Ensure the canonical default unit exists (called at startup)
    pub async fn seed_default(&self) -> RepoResult<Uom> {
        if let Some(existing) = self
            .base
            .db()
            .select::<Option<Uom>>((TABLE, DEFAULT_UOM_KEY))
            .await?
        {
            return Ok(existing);
        }

        let uom = Uom {
            id: None,
            name: "Unit".to_string(),
            code: DEFAULT_UOM_KEY.to_string(),
        };
        let created: Option<Uom> = self
            .base
            .db()
            .create((TABLE, DEFAULT_UOM_KEY))
            .content(uom)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to seed default uom".to_string()))
    }
}
