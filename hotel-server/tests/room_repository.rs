//! Room repository integration tests against a fresh in-memory database.

use hotel_server::db::DbService;
use hotel_server::db::models::{
    FloorCreate, HotelInfoUpdate, RoomCreate, RoomStatus, RoomType, RoomUpdate, TaxCreate,
    TaxScope,
};
use hotel_server::db::repository::{
    FloorRepository, HotelInfoRepository, RepoError, RoomRepository, TaxRepository, UomRepository,
};
use rust_decimal::Decimal;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

async fn setup() -> Surreal<Db> {
    DbService::memory().await.expect("in-memory db").db
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

#[tokio::test]
async fn test_create_room_with_defaults() {
    let db = setup().await;
    let repo = RoomRepository::new(db);

    let room = repo
        .create(room_payload("101", RoomType::Single, 1))
        .await
        .expect("create room");

    assert_eq!(room.name, "101");
    assert_eq!(room.status, RoomStatus::Available);
    assert!(room.is_available);
    assert_eq!(room.num_person, 1);
    assert_eq!(room.room_type, RoomType::Single);
    assert_eq!(room.uom, RecordId::from_table_key("uom", "unit"));
    // No default sale tax configured yet
    assert!(room.taxes.is_empty());
    assert!(room.created_at.is_some());
}

#[tokio::test]
async fn test_create_rejects_zero_capacity() {
    let db = setup().await;
    let repo = RoomRepository::new(db);

    let err = repo
        .create(room_payload("102", RoomType::Double, 0))
        .await
        .expect_err("capacity 0 must be rejected");

    assert!(matches!(err, RepoError::InvalidCapacity));
    assert_eq!(err.to_string(), "Room capacity must be more than 0");
}

#[tokio::test]
async fn test_create_rejects_negative_capacity() {
    let db = setup().await;
    let repo = RoomRepository::new(db);

    let err = repo
        .create(room_payload("103", RoomType::Dormitory, -2))
        .await
        .expect_err("negative capacity must be rejected");
    assert!(matches!(err, RepoError::InvalidCapacity));
}

#[tokio::test]
async fn test_update_rejects_non_positive_capacity() {
    let db = setup().await;
    let repo = RoomRepository::new(db);

    let room = repo
        .create(room_payload("201", RoomType::Double, 2))
        .await
        .unwrap();
    let id = room.id.unwrap().to_string();

    let err = repo
        .update(
            &id,
            RoomUpdate {
                num_person: Some(0),
                ..empty_update()
            },
        )
        .await
        .expect_err("capacity 0 must be rejected on update");
    assert_eq!(err.to_string(), "Room capacity must be more than 0");

    // Unchanged after the failed update
    let reloaded = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(reloaded.num_person, 2);
}

#[tokio::test]
async fn test_duplicate_name_rejected() {
    let db = setup().await;
    let repo = RoomRepository::new(db);

    repo.create(room_payload("301", RoomType::Single, 1))
        .await
        .unwrap();
    let err = repo
        .create(room_payload("301", RoomType::Double, 2))
        .await
        .expect_err("duplicate name must be rejected");
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn test_default_uom_is_memoized() {
    let db = setup().await;
    let repo = UomRepository::new(db);

    let first = repo.default_uom().await.unwrap();
    let second = repo.default_uom().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first, RecordId::from_table_key("uom", "unit"));
}

#[tokio::test]
async fn test_default_tax_inherited_from_hotel_info() {
    let db = setup().await;
    let tax_repo = TaxRepository::new(db.clone());
    let info_repo = HotelInfoRepository::new(db.clone());
    let room_repo = RoomRepository::new(db);

    let tax = tax_repo
        .create(TaxCreate {
            name: "City Tax".to_string(),
            rate: Decimal::new(10, 0),
            scope: TaxScope::Sale,
        })
        .await
        .unwrap();
    let tax_id = tax.id.clone().unwrap();

    info_repo
        .update(HotelInfoUpdate {
            default_sale_tax: Some(tax_id.clone()),
            ..HotelInfoUpdate::default()
        })
        .await
        .unwrap();

    let room = room_repo
        .create(room_payload("401", RoomType::Single, 1))
        .await
        .unwrap();
    assert_eq!(room.taxes, vec![tax_id]);
}

#[tokio::test]
async fn test_non_sale_tax_rejected() {
    let db = setup().await;
    let tax_repo = TaxRepository::new(db.clone());
    let room_repo = RoomRepository::new(db);

    let tax = tax_repo
        .create(TaxCreate {
            name: "Supplier Tax".to_string(),
            rate: Decimal::new(21, 0),
            scope: TaxScope::Purchase,
        })
        .await
        .unwrap();

    let mut payload = room_payload("501", RoomType::Single, 1);
    payload.taxes = Some(vec![tax.id.unwrap()]);

    let err = room_repo
        .create(payload)
        .await
        .expect_err("purchase tax must be rejected");
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(err.to_string().contains("not a sale tax"));
}

#[tokio::test]
async fn test_responsible_read_through_floor() {
    let db = setup().await;
    let floor_repo = FloorRepository::new(db.clone());
    let room_repo = RoomRepository::new(db);

    let user = RecordId::from_table_key("user", "alice");
    let floor = floor_repo
        .create(FloorCreate {
            name: "First Floor".to_string(),
            user: Some(user.clone()),
        })
        .await
        .unwrap();

    let mut payload = room_payload("601", RoomType::Double, 2);
    payload.floor = floor.id.clone();
    let room = room_repo.create(payload).await.unwrap();

    assert_eq!(room.floor, floor.id);
    assert_eq!(room.responsible, Some(user));

    // Floor-less rooms have no responsible user
    let orphan = room_repo
        .create(room_payload("602", RoomType::Single, 1))
        .await
        .unwrap();
    assert!(orphan.responsible.is_none());
}

#[tokio::test]
async fn test_floor_can_be_cleared_on_update() {
    let db = setup().await;
    let floor_repo = FloorRepository::new(db.clone());
    let room_repo = RoomRepository::new(db);

    let user = RecordId::from_table_key("user", "bob");
    let floor = floor_repo
        .create(FloorCreate {
            name: "Third Floor".to_string(),
            user: Some(user.clone()),
        })
        .await
        .unwrap();

    let mut payload = room_payload("611", RoomType::Single, 1);
    payload.floor = floor.id.clone();
    let room = room_repo.create(payload).await.unwrap();
    assert_eq!(room.responsible, Some(user));
    let id = room.id.unwrap().to_string();

    // Absent floor field keeps the link
    let kept = room_repo
        .update(
            &id,
            RoomUpdate {
                num_person: Some(2),
                ..empty_update()
            },
        )
        .await
        .unwrap();
    assert_eq!(kept.floor, floor.id);

    // Explicit clear drops the link and the derived responsible user
    let cleared = room_repo
        .update(
            &id,
            RoomUpdate {
                floor: Some(None),
                ..empty_update()
            },
        )
        .await
        .unwrap();
    assert!(cleared.floor.is_none());
    assert!(cleared.responsible.is_none());
}

#[tokio::test]
async fn test_floor_delete_refused_while_rooms_reference_it() {
    let db = setup().await;
    let floor_repo = FloorRepository::new(db.clone());
    let room_repo = RoomRepository::new(db);

    let floor = floor_repo
        .create(FloorCreate {
            name: "Second Floor".to_string(),
            user: None,
        })
        .await
        .unwrap();
    let floor_id = floor.id.clone().unwrap().to_string();

    let mut payload = room_payload("701", RoomType::Single, 1);
    payload.floor = floor.id.clone();
    let room = room_repo.create(payload).await.unwrap();

    let err = floor_repo
        .delete(&floor_id)
        .await
        .expect_err("floor with rooms must not be deletable");
    assert!(matches!(err, RepoError::Validation(_)));

    room_repo
        .delete(&room.id.unwrap().to_string())
        .await
        .unwrap();
    assert!(floor_repo.delete(&floor_id).await.unwrap());
}

#[tokio::test]
async fn test_tax_delete_refused_while_rooms_reference_it() {
    let db = setup().await;
    let tax_repo = TaxRepository::new(db.clone());
    let room_repo = RoomRepository::new(db);

    let tax = tax_repo
        .create(TaxCreate {
            name: "Tourist Tax".to_string(),
            rate: Decimal::new(5, 0),
            scope: TaxScope::Sale,
        })
        .await
        .unwrap();
    let tax_id = tax.id.unwrap();

    let mut payload = room_payload("901", RoomType::Single, 1);
    payload.taxes = Some(vec![tax_id.clone()]);
    let room = room_repo.create(payload).await.unwrap();

    let err = tax_repo
        .delete(&tax_id.to_string())
        .await
        .expect_err("tax referenced by a room must not be deletable");
    assert!(matches!(err, RepoError::Validation(_)));

    room_repo
        .delete(&room.id.unwrap().to_string())
        .await
        .unwrap();
    assert!(tax_repo.delete(&tax_id.to_string()).await.unwrap());
}

#[tokio::test]
async fn test_default_sale_tax_delete_refused() {
    let db = setup().await;
    let tax_repo = TaxRepository::new(db.clone());
    let info_repo = HotelInfoRepository::new(db);

    let tax = tax_repo
        .create(TaxCreate {
            name: "VAT".to_string(),
            rate: Decimal::new(20, 0),
            scope: TaxScope::Sale,
        })
        .await
        .unwrap();
    let tax_id = tax.id.unwrap();

    info_repo
        .update(HotelInfoUpdate {
            default_sale_tax: Some(tax_id.clone()),
            ..HotelInfoUpdate::default()
        })
        .await
        .unwrap();

    let err = tax_repo
        .delete(&tax_id.to_string())
        .await
        .expect_err("configured default sale tax must not be deletable");
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn test_search_by_name() {
    let db = setup().await;
    let repo = RoomRepository::new(db);

    repo.create(room_payload("Suite 801", RoomType::Double, 2))
        .await
        .unwrap();
    repo.create(room_payload("Suite 802", RoomType::Double, 2))
        .await
        .unwrap();
    repo.create(room_payload("Penthouse", RoomType::Dormitory, 4))
        .await
        .unwrap();

    let found = repo.search_by_name("suite").await.unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].name, "Suite 801");

    let none = repo.search_by_name("cellar").await.unwrap();
    assert!(none.is_empty());
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
