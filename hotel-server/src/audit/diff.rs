//! Tracked-field diff for audited entities
//!
//! Only the fields marked as tracked produce change history: room status,
//! floor, responsible user, room type and occupant capacity. Price, image
//! and the other fields change without an audit trail.

use super::types::FieldChange;
use crate::db::models::Room;
use serde_json::{Value, json};
use surrealdb::RecordId;

fn link(id: &Option<RecordId>) -> Value {
    match id {
        Some(id) => json!(id.to_string()),
        None => Value::Null,
    }
}

/// Compute the tracked-field changes between two room snapshots
pub fn diff_room(old: &Room, new: &Room) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    if old.status != new.status {
        changes.push(FieldChange {
            field: "status".into(),
            old: json!(old.status),
            new: json!(new.status),
        });
    }
    if old.floor != new.floor {
        changes.push(FieldChange {
            field: "floor".into(),
            old: link(&old.floor),
            new: link(&new.floor),
        });
    }
    if old.responsible != new.responsible {
        changes.push(FieldChange {
            field: "responsible".into(),
            old: link(&old.responsible),
            new: link(&new.responsible),
        });
    }
    if old.room_type != new.room_type {
        changes.push(FieldChange {
            field: "room_type".into(),
            old: json!(old.room_type),
            new: json!(new.room_type),
        });
    }
    if old.num_person != new.num_person {
        changes.push(FieldChange {
            field: "num_person".into(),
            old: json!(old.num_person),
            new: json!(new.num_person),
        });
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{RoomStatus, RoomType};

    fn room(status: RoomStatus, room_type: RoomType, num_person: i32) -> Room {
        serde_json::from_value(json!({
            "name": "101",
            "status": status,
            "uom": "uom:unit",
            "room_type": room_type,
            "num_person": num_person,
        }))
        .unwrap()
    }

    #[test]
    fn test_no_changes() {
        let a = room(RoomStatus::Available, RoomType::Single, 1);
        let b = room(RoomStatus::Available, RoomType::Single, 1);
        assert!(diff_room(&a, &b).is_empty());
    }

    #[test]
    fn test_tracked_changes_captured() {
        let a = room(RoomStatus::Available, RoomType::Single, 1);
        let b = room(RoomStatus::Occupied, RoomType::Dormitory, 4);
        let changes = diff_room(&a, &b);
        let fields: Vec<&str> = changes.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, vec!["status", "room_type", "num_person"]);
        assert_eq!(changes[0].old, json!("available"));
        assert_eq!(changes[0].new, json!("occupied"));
    }

    #[test]
    fn test_untracked_price_change_ignored() {
        let a = room(RoomStatus::Available, RoomType::Single, 1);
        let mut b = room(RoomStatus::Available, RoomType::Single, 1);
        b.list_price = rust_decimal::Decimal::new(9900, 2);
        b.description = Some("sea view".into());
        assert!(diff_room(&a, &b).is_empty());
    }

    #[test]
    fn test_floor_change_captured() {
        let a = room(RoomStatus::Available, RoomType::Single, 1);
        let mut b = room(RoomStatus::Available, RoomType::Single, 1);
        b.floor = Some("floor:first".parse().unwrap());
        let changes = diff_room(&a, &b);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, "floor");
        assert_eq!(changes[0].old, Value::Null);
        assert_eq!(changes[0].new, json!("floor:first"));
    }
}
