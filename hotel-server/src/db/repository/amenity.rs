//! Amenity Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Amenity, AmenityCreate, AmenityUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "amenity";

#[derive(Clone)]
pub struct AmenityRepository {
    base: BaseRepository,
}

impl AmenityRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all amenities
    pub async fn find_all(&self) -> RepoResult<Vec<Amenity>> {
        let amenities: Vec<Amenity> = self
            .base
            .db()
            .query("SELECT * FROM amenity ORDER BY name")
            .await?
            .take(0)?;
        Ok(amenities)
    }

    /// Find amenity by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Amenity>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let amenity: Option<Amenity> = self.base.db().select(thing).await?;
        Ok(amenity)
    }

    /// Create a new amenity
    pub async fn create(&self, data: AmenityCreate) -> RepoResult<Amenity> {
        let amenity = Amenity {
            id: None,
            name: data.name,
            icon: data.icon,
        };
        let created: Option<Amenity> = self.base.db().create(TABLE).content(amenity).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create amenity".to_string()))
    }

    /// Update an amenity
    pub async fn update(&self, id: &str, data: AmenityUpdate) -> RepoResult<Amenity> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Amenity {} not found", id)))?;

        let updated: Option<Amenity> = self.base.db().update(thing).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Amenity {} not found", id)))
    }

    /// Hard delete an amenity
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
