//! Room Repository
//!
//! Write paths enforce the occupant-capacity invariant and the sale-scope
//! restriction on referenced taxes. Reads resolve the responsible user
//! through the floor reference (`floor.user`), which is never stored on the
//! room itself.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Room, RoomCreate, RoomUpdate, Tax, TaxScope};
use crate::db::repository::{HotelInfoRepository, UomRepository};
use crate::utils::now_millis;
use rust_decimal::Decimal;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

/// Fields selected on every read; `responsible` is derived, not stored.
const SELECT_FIELDS: &str = "*, floor.user AS responsible";

#[derive(Clone)]
pub struct RoomRepository {
    base: BaseRepository,
}

impl RoomRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all rooms
    pub async fn find_all(&self) -> RepoResult<Vec<Room>> {
        let rooms: Vec<Room> = self
            .base
            .db()
            .query(format!("SELECT {SELECT_FIELDS} FROM room ORDER BY name"))
            .await?
            .take(0)?;
        Ok(rooms)
    }

    /// Substring search on room name (case-insensitive)
    pub async fn search_by_name(&self, needle: &str) -> RepoResult<Vec<Room>> {
        let rooms: Vec<Room> = self
            .base
            .db()
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM room \
                 WHERE string::lowercase(name) CONTAINS string::lowercase($needle) \
                 ORDER BY name"
            ))
            .bind(("needle", needle.to_string()))
            .await?
            .take(0)?;
        Ok(rooms)
    }

    /// Find room by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Room>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let rooms: Vec<Room> = self
            .base
            .db()
            .query(format!("SELECT {SELECT_FIELDS} FROM room WHERE id = $id"))
            .bind(("id", thing))
            .await?
            .take(0)?;
        Ok(rooms.into_iter().next())
    }

    /// Find room by exact name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Room>> {
        let rooms: Vec<Room> = self
            .base
            .db()
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM room WHERE name = $name LIMIT 1"
            ))
            .bind(("name", name.to_string()))
            .await?
            .take(0)?;
        Ok(rooms.into_iter().next())
    }

    /// Find rooms on a floor
    pub async fn find_by_floor(&self, floor: &RecordId) -> RepoResult<Vec<Room>> {
        let rooms: Vec<Room> = self
            .base
            .db()
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM room WHERE floor = $floor ORDER BY name"
            ))
            .bind(("floor", floor.clone()))
            .await?
            .take(0)?;
        Ok(rooms)
    }

    /// Create a new room
    ///
    /// Applies the record-creation defaults: unit of measure from the cached
    /// canonical lookup, taxes from hotel info's configured sale tax.
    pub async fn create(&self, data: RoomCreate) -> RepoResult<Room> {
        if data.num_person <= 0 {
            return Err(RepoError::InvalidCapacity);
        }

        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("Room name is required".into()));
        }

        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Room '{}' already exists",
                data.name
            )));
        }

        let uom = match data.uom {
            Some(uom) => uom,
            None => {
                UomRepository::new(self.base.db().clone())
                    .default_uom()
                    .await?
            }
        };

        let taxes = match data.taxes {
            Some(taxes) => {
                self.ensure_sale_taxes(&taxes).await?;
                taxes
            }
            None => {
                let info = HotelInfoRepository::new(self.base.db().clone())
                    .get_or_create()
                    .await?;
                info.default_sale_tax.into_iter().collect()
            }
        };

        let now = now_millis();
        let created: Vec<Room> = self
            .base
            .db()
            .query(
                "CREATE room CONTENT { \
                    name: $name, status: $status, is_available: $is_available, \
                    list_price: $list_price, uom: $uom, image: $image, \
                    taxes: $taxes, amenities: $amenities, floor: $floor, \
                    room_type: $room_type, num_person: $num_person, \
                    description: $description, created_at: $now, updated_at: $now \
                }",
            )
            .bind(("name", data.name))
            .bind(("status", data.status.unwrap_or_default()))
            .bind(("is_available", data.is_available.unwrap_or(true)))
            .bind(("list_price", data.list_price.unwrap_or(Decimal::ZERO)))
            .bind(("uom", uom))
            .bind(("image", data.image))
            .bind(("taxes", taxes))
            .bind(("amenities", data.amenities.unwrap_or_default()))
            .bind(("floor", data.floor))
            .bind(("room_type", data.room_type.unwrap_or_default()))
            .bind(("num_person", data.num_person))
            .bind(("description", data.description))
            .bind(("now", now))
            .await?
            .take(0)?;

        let id = created
            .into_iter()
            .next()
            .and_then(|r| r.id)
            .ok_or_else(|| RepoError::Database("Failed to create room".to_string()))?;

        self.find_by_id(&id.to_string())
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create room".to_string()))
    }

    /// Update a room
    pub async fn update(&self, id: &str, data: RoomUpdate) -> RepoResult<Room> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Room {} not found", id)))?;

        if let Some(num_person) = data.num_person
            && num_person <= 0
        {
            return Err(RepoError::InvalidCapacity);
        }

        if let Some(name) = data.name.as_ref() {
            if name.trim().is_empty() {
                return Err(RepoError::Validation("Room name is required".into()));
            }
            if let Some(found) = self.find_by_name(name).await?
                && found.id != existing.id
            {
                return Err(RepoError::Duplicate(format!(
                    "Room '{}' already exists",
                    name
                )));
            }
        }

        if let Some(taxes) = data.taxes.as_ref() {
            self.ensure_sale_taxes(taxes).await?;
        }

        // 手动构建 UPDATE 语句，避免 record link 被序列化为字符串
        let name = data.name.unwrap_or(existing.name);
        let status = data.status.unwrap_or(existing.status);
        let is_available = data.is_available.unwrap_or(existing.is_available);
        let list_price = data.list_price.unwrap_or(existing.list_price);
        let uom = data.uom.unwrap_or(existing.uom);
        // Double-option fields: absent keeps the stored value, explicit null
        // clears it
        let image = data.image.unwrap_or(existing.image);
        let taxes = data.taxes.unwrap_or(existing.taxes);
        let amenities = data.amenities.unwrap_or(existing.amenities);
        let floor = data.floor.unwrap_or(existing.floor);
        let room_type = data.room_type.unwrap_or(existing.room_type);
        let num_person = data.num_person.unwrap_or(existing.num_person);
        let description = data.description.unwrap_or(existing.description);

        self.base
            .db()
            .query(
                "UPDATE $thing SET \
                    name = $name, status = $status, is_available = $is_available, \
                    list_price = $list_price, uom = $uom, image = $image, \
                    taxes = $taxes, amenities = $amenities, floor = $floor, \
                    room_type = $room_type, num_person = $num_person, \
                    description = $description, updated_at = $now",
            )
            .bind(("thing", thing))
            .bind(("name", name))
            .bind(("status", status))
            .bind(("is_available", is_available))
            .bind(("list_price", list_price))
            .bind(("uom", uom))
            .bind(("image", image))
            .bind(("taxes", taxes))
            .bind(("amenities", amenities))
            .bind(("floor", floor))
            .bind(("room_type", room_type))
            .bind(("num_person", num_person))
            .bind(("description", description))
            .bind(("now", now_millis()))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Room {} not found", id)))
    }

    /// Hard delete a room
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

    /// Reject any referenced tax that is not sale-scoped
    async fn ensure_sale_taxes(&self, taxes: &[RecordId]) -> RepoResult<()> {
        for tax_id in taxes {
            let tax: Option<Tax> = self.base.db().select(tax_id.clone()).await?;
            let tax = tax
                .ok_or_else(|| RepoError::NotFound(format!("Tax {} not found", tax_id)))?;
            if tax.scope != TaxScope::Sale {
                return Err(RepoError::Validation(format!(
                    "Tax '{}' is not a sale tax",
                    tax.name
                )));
            }
        }
        Ok(())
    }
}
