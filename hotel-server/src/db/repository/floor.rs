//! Floor Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Floor, FloorCreate, FloorUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

#[derive(Clone)]
pub struct FloorRepository {
    base: BaseRepository,
}

impl FloorRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all floors
    pub async fn find_all(&self) -> RepoResult<Vec<Floor>> {
        let floors: Vec<Floor> = self
            .base
            .db()
            .query("SELECT * FROM floor ORDER BY name")
            .await?
            .take(0)?;
        Ok(floors)
    }

    /// Find floor by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Floor>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let floor: Option<Floor> = self.base.db().select(thing).await?;
        Ok(floor)
    }

    /// Find floor by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Floor>> {
        let floors: Vec<Floor> = self
            .base
            .db()
            .query("SELECT * FROM floor WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?
            .take(0)?;
        Ok(floors.into_iter().next())
    }

    /// Create a new floor
    pub async fn create(&self, data: FloorCreate) -> RepoResult<Floor> {
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Floor '{}' already exists",
                data.name
            )));
        }

        let created: Vec<Floor> = self
            .base
            .db()
            .query("CREATE floor CONTENT { name: $name, user: $user }")
            .bind(("name", data.name))
            .bind(("user", data.user))
            .await?
            .take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create floor".to_string()))
    }

    /// Update a floor
    pub async fn update(&self, id: &str, data: FloorUpdate) -> RepoResult<Floor> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Floor {} not found", id)))?;

        if let Some(name) = data.name.as_ref()
            && let Some(found) = self.find_by_name(name).await?
            && found.id != existing.id
        {
            return Err(RepoError::Duplicate(format!(
                "Floor '{}' already exists",
                name
            )));
        }

        let name = data.name.unwrap_or(existing.name);
        let user = data.user.or(existing.user);

        self.base
            .db()
            .query("UPDATE $thing SET name = $name, user = $user")
            .bind(("thing", thing))
            .bind(("name", name))
            .bind(("user", user))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Floor {} not found", id)))
    }

    /// Hard delete a floor
    ///
    /// Refused while rooms still reference it, so room responsible-user
    /// reads never dangle.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        let mut result = self
            .base
            .db()
            .query("SELECT count() AS total FROM room WHERE floor = $floor GROUP ALL")
            .bind(("floor", thing.clone()))
            .await?;
        let counts: Vec<serde_json::Value> = result.take(0)?;
        let in_use = counts
            .first()
            .and_then(|v| v.get("total"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        if in_use > 0 {
            return Err(RepoError::Validation(
                "Cannot delete floor with rooms".into(),
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
