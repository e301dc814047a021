//! Audit trail integration tests: change tracking and hash-chain integrity.

use hotel_server::audit::{AuditAction, AuditQuery, AuditService};
use hotel_server::db::DbService;
use hotel_server::db::models::{RoomCreate, RoomStatus, RoomType, RoomUpdate};
use hotel_server::db::repository::RoomRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

async fn setup() -> (Surreal<Db>, AuditService) {
    let db = DbService::memory().await.expect("in-memory db").db;
    let audit = AuditService::new(db.clone(), true);
    (db, audit)
}

fn room_payload(name: &str, room_type: RoomType, num_person: i32) -> RoomCreate {
    RoomCreate {
        name: name.to_string(),
        status: None,
        is_available: None,
        list_price: None,
        uom: None,
        image: None,
        taxes: None,
        amenities: None,
        floor: None,
        room_type: Some(room_type),
        num_person,
        description: None,
    }
}

fn empty_update() -> RoomUpdate {
    RoomUpdate {
        name: None,
        status: None,
        is_available: None,
        list_price: None,
        uom: None,
        image: None,
        taxes: None,
        amenities: None,
        floor: None,
        room_type: None,
        num_person: None,
        description: None,
    }
}

#[tokio::test]
async fn test_room_created_entry() {
    let (db, audit) = setup().await;
    let repo = RoomRepository::new(db);

    let room = repo
        .create(room_payload("101", RoomType::Single, 1))
        .await
        .unwrap();
    let entry = audit.room_created(&room).await.unwrap().expect("entry");

    assert_eq!(entry.id, 1);
    assert_eq!(entry.action, AuditAction::RoomCreated);
    assert_eq!(entry.resource_type, "room");
    assert_eq!(entry.details["name"], "101");
    assert_eq!(entry.details["num_person"], 1);
    assert_eq!(entry.prev_hash, "genesis");
}

#[tokio::test]
async fn test_room_updated_diff_tracks_only_listed_fields() {
    let (db, audit) = setup().await;
    let repo = RoomRepository::new(db);

    let old = repo
        .create(room_payload("201", RoomType::Single, 1))
        .await
        .unwrap();
    let id = old.id.clone().unwrap().to_string();

    let new = repo
        .update(
            &id,
            RoomUpdate {
                status: Some(RoomStatus::Occupied),
                room_type: Some(RoomType::Dormitory),
                num_person: Some(4),
                ..empty_update()
            },
        )
        .await
        .unwrap();

    let entry = audit
        .room_updated(&old, &new)
        .await
        .unwrap()
        .expect("tracked fields changed");
    let changes = entry.details["changes"].as_array().unwrap();
    let fields: Vec<&str> = changes
        .iter()
        .map(|c| c["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["status", "room_type", "num_person"]);
}

#[tokio::test]
async fn test_untracked_update_produces_no_entry() {
    let (db, audit) = setup().await;
    let repo = RoomRepository::new(db);

    let old = repo
        .create(room_payload("301", RoomType::Single, 1))
        .await
        .unwrap();
    let id = old.id.clone().unwrap().to_string();

    // Price and description are not tracked fields
    let new = repo
        .update(
            &id,
            RoomUpdate {
                list_price: Some(rust_decimal::Decimal::new(99, 0)),
                description: Some(Some("refurbished".to_string())),
                ..empty_update()
            },
        )
        .await
        .unwrap();

    let entry = audit.room_updated(&old, &new).await.unwrap();
    assert!(entry.is_none());
    let (_, total) = audit.query(&AuditQuery::default()).await.unwrap();
    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_disabled_service_writes_nothing() {
    let db = DbService::memory().await.unwrap().db;
    let audit = AuditService::new(db.clone(), false);
    let repo = RoomRepository::new(db);

    let room = repo
        .create(room_payload("401", RoomType::Single, 1))
        .await
        .unwrap();
    assert!(audit.room_created(&room).await.unwrap().is_none());

    let (items, total) = audit.query(&AuditQuery::default()).await.unwrap();
    assert!(items.is_empty());
    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_chain_links_and_verifies() {
    let (db, audit) = setup().await;
    let repo = RoomRepository::new(db);

    audit.system_startup().await.unwrap();
    let room = repo
        .create(room_payload("501", RoomType::Double, 2))
        .await
        .unwrap();
    audit.room_created(&room).await.unwrap();
    let id = room.id.clone().unwrap().to_string();
    repo.delete(&id).await.unwrap();
    audit.room_deleted(&id).await.unwrap();

    let (items, total) = audit.query(&AuditQuery::default()).await.unwrap();
    assert_eq!(total, 3);
    // Newest first
    assert_eq!(items[0].action, AuditAction::RoomDeleted);
    assert_eq!(items[2].action, AuditAction::SystemStartup);
    assert_eq!(items[1].prev_hash, items[2].curr_hash);
    assert_eq!(items[0].prev_hash, items[1].curr_hash);

    let verification = audit.storage().verify_chain().await.unwrap();
    assert_eq!(verification.total_entries, 3);
    assert!(verification.chain_intact);
    assert!(verification.breaks.is_empty());
}

#[tokio::test]
async fn test_tampering_breaks_the_chain() {
    let (db, audit) = setup().await;

    audit.system_startup().await.unwrap();
    audit.system_shutdown().await.unwrap();

    // Rewrite a stored detail behind the storage layer's back
    db.query("UPDATE audit_log SET resource_id = 'forged' WHERE sequence = 1")
        .await
        .unwrap();

    let verification = audit.storage().verify_chain().await.unwrap();
    assert!(!verification.chain_intact);
    assert!(!verification.breaks.is_empty());
}

#[tokio::test]
async fn test_query_filters() {
    let (db, audit) = setup().await;
    let repo = RoomRepository::new(db);

    audit.system_startup().await.unwrap();
    let room = repo
        .create(room_payload("601", RoomType::Single, 1))
        .await
        .unwrap();
    audit.room_created(&room).await.unwrap();

    let query = AuditQuery {
        action: Some(AuditAction::RoomCreated),
        ..AuditQuery::default()
    };
    let (items, _) = audit.query(&query).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].action, AuditAction::RoomCreated);

    let query = AuditQuery {
        resource_type: Some("system".to_string()),
        ..AuditQuery::default()
    };
    let (items, _) = audit.query(&query).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].action, AuditAction::SystemStartup);
}
