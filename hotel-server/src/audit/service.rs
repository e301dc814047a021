//! Audit log service
//!
//! Thin layer over [`AuditStorage`] that serializes appends (the hash chain
//! requires a total order) and knows how to record room change history.

use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::Mutex;

use super::diff::diff_room;
use super::storage::{AuditStorage, AuditStorageResult};
use super::types::{AuditAction, AuditEntry, AuditQuery};
use crate::db::models::Room;

/// Audit log service
#[derive(Clone)]
pub struct AuditService {
    storage: AuditStorage,
    enabled: bool,
    // Appends must not interleave or the chain forks
    append_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for AuditService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditService")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

impl AuditService {
    pub fn new(db: Surreal<Db>, enabled: bool) -> Self {
        Self {
            storage: AuditStorage::new(db),
            enabled,
            append_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn storage(&self) -> &AuditStorage {
        &self.storage
    }

    /// Record one entry; no-op when auditing is disabled
    pub async fn log(
        &self,
        action: AuditAction,
        resource_type: &str,
        resource_id: &str,
        details: serde_json::Value,
    ) -> AuditStorageResult<Option<AuditEntry>> {
        if !self.enabled {
            return Ok(None);
        }
        let _guard = self.append_lock.lock().await;
        let entry = self
            .storage
            .append(action, resource_type, resource_id, details)
            .await?;
        Ok(Some(entry))
    }

    /// Record room creation with a snapshot of the tracked fields
    pub async fn room_created(&self, room: &Room) -> AuditStorageResult<Option<AuditEntry>> {
        let resource_id = room.id.as_ref().map(|r| r.to_string()).unwrap_or_default();
        let details = serde_json::json!({
            "name": room.name,
            "status": room.status,
            "room_type": room.room_type,
            "num_person": room.num_person,
        });
        self.log(AuditAction::RoomCreated, "room", &resource_id, details)
            .await
    }

    /// Record the tracked-field changes of a room update
    ///
    /// Skipped entirely when no tracked field changed.
    pub async fn room_updated(
        &self,
        old: &Room,
        new: &Room,
    ) -> AuditStorageResult<Option<AuditEntry>> {
        let changes = diff_room(old, new);
        if changes.is_empty() {
            return Ok(None);
        }
        let resource_id = new.id.as_ref().map(|r| r.to_string()).unwrap_or_default();
        let details = serde_json::json!({ "changes": changes });
        self.log(AuditAction::RoomUpdated, "room", &resource_id, details)
            .await
    }

    /// Record room deletion
    pub async fn room_deleted(&self, id: &str) -> AuditStorageResult<Option<AuditEntry>> {
        self.log(
            AuditAction::RoomDeleted,
            "room",
            id,
            serde_json::Value::Null,
        )
        .await
    }

    /// Record hotel info change
    pub async fn hotel_info_changed(
        &self,
        details: serde_json::Value,
    ) -> AuditStorageResult<Option<AuditEntry>> {
        self.log(
            AuditAction::HotelInfoChanged,
            "hotel_info",
            "hotel_info:main",
            details,
        )
        .await
    }

    /// Record system startup
    pub async fn system_startup(&self) -> AuditStorageResult<Option<AuditEntry>> {
        self.log(
            AuditAction::SystemStartup,
            "system",
            "system",
            serde_json::Value::Null,
        )
        .await
    }

    /// Record system shutdown
    pub async fn system_shutdown(&self) -> AuditStorageResult<Option<AuditEntry>> {
        self.log(
            AuditAction::SystemShutdown,
            "system",
            "system",
            serde_json::Value::Null,
        )
        .await
    }

    /// Query entries with count
    pub async fn query(
        &self,
        query: &AuditQuery,
    ) -> AuditStorageResult<(Vec<AuditEntry>, u64)> {
        let items = self.storage.query(query).await?;
        let total = self.storage.count().await?;
        Ok((items, total))
    }
}
