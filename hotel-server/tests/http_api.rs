//! HTTP API integration tests, driving the router directly with oneshot
//! requests against an in-memory state.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use hotel_server::api::build_app;
use hotel_server::core::{Config, ServerState};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> Router {
    let work_dir = tempfile::tempdir().expect("tempdir");
    let config = Config::with_overrides(work_dir.keep().to_string_lossy(), 0);
    let state = ServerState::for_tests(config).await.expect("state");
    build_app(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_and_list_rooms() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/rooms",
            json!({"name": "101", "room_type": "single", "num_person": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let room = body_json(response).await;
    assert_eq!(room["name"], "101");
    assert_eq!(room["status"], "available");
    assert_eq!(room["is_available"], true);

    let response = app
        .oneshot(Request::get("/api/rooms").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let rooms = body_json(response).await;
    assert_eq!(rooms.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_room_zero_capacity_is_bad_request() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/rooms",
            json!({"name": "102", "room_type": "double", "num_person": 0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 6001);
    assert_eq!(body["message"], "Room capacity must be more than 0");
}

#[tokio::test]
async fn test_update_room_zero_capacity_same_error_as_create() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/rooms",
            json!({"name": "103", "room_type": "double", "num_person": 2}),
        ))
        .await
        .unwrap();
    let room = body_json(response).await;
    let id = room["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/rooms/{id}"),
            json!({"num_person": -1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 6001);
    assert_eq!(body["message"], "Room capacity must be more than 0");
}

#[tokio::test]
async fn test_room_type_change_suggestion() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/rooms/room-type-change",
            json!({"room_type": "dormitory", "num_person": 9}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let draft = body_json(response).await;
    assert_eq!(draft["num_person"], 4);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/rooms/room-type-change",
            json!({"room_type": "double"}),
        ))
        .await
        .unwrap();
    let draft = body_json(response).await;
    assert_eq!(draft["num_person"], 2);
}

#[tokio::test]
async fn test_get_missing_room_is_not_found() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::get("/api/rooms/room:missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], 3);
}

#[tokio::test]
async fn test_hotel_info_singleton_roundtrip() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/hotel-info",
            json!({"name": "Seaside Hotel", "address": "1 Beach Road"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::get("/api/hotel-info").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let info = body_json(response).await;
    assert_eq!(info["name"], "Seaside Hotel");
    assert_eq!(info["address"], "1 Beach Road");
}

#[tokio::test]
async fn test_audit_verify_endpoint() {
    let app = test_app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/rooms",
            json!({"name": "301", "num_person": 2}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::get("/api/audit-log/verify")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["chain_intact"], true);
}
