//! Room API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{Room, RoomCreate, RoomDraft, RoomUpdate};
use crate::db::repository::RoomRepository;
use crate::utils::{AppError, AppResult};

/// List query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Substring filter on room name
    pub q: Option<String>,
}

/// GET /api/rooms - 获取所有客房（可选按名称搜索）
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Room>>> {
    let repo = RoomRepository::new(state.db.clone());
    let rooms = match query.q.as_deref() {
        Some(needle) if !needle.is_empty() => repo.search_by_name(needle).await?,
        _ => repo.find_all().await?,
    };
    Ok(Json(rooms))
}

/// GET /api/rooms/:id - 获取单个客房
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Room>> {
    let repo = RoomRepository::new(state.db.clone());
    let room = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Room {}", id)))?;
    Ok(Json(room))
}

/// POST /api/rooms - 创建客房
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<Json<Room>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = RoomRepository::new(state.db.clone());
    let room = repo.create(payload).await?;

    if let Err(e) = state.audit.room_created(&room).await {
        tracing::warn!("Failed to record room creation: {e}");
    }

    Ok(Json(room))
}

/// PUT /api/rooms/:id - 更新客房
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RoomUpdate>,
) -> AppResult<Json<Room>> {
    let repo = RoomRepository::new(state.db.clone());
    let old = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Room {}", id)))?;

    let room = repo.update(&id, payload).await?;

    if let Err(e) = state.audit.room_updated(&old, &room).await {
        tracing::warn!("Failed to record room update: {e}");
    }

    Ok(Json(room))
}

/// DELETE /api/rooms/:id - 删除客房
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = RoomRepository::new(state.db.clone());
    repo.find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Room {}", id)))?;
    let result = repo.delete(&id).await?;

    if result
        && let Err(e) = state.audit.room_deleted(&id).await
    {
        tracing::warn!("Failed to record room deletion: {e}");
    }

    Ok(Json(result))
}

/// POST /api/rooms/room-type-change - 交互式编辑建议
///
/// Applies the room-type capacity suggestion to an in-progress draft and
/// returns it. Nothing is persisted; programmatic create/update never runs
/// this.
pub async fn room_type_change(Json(mut draft): Json<RoomDraft>) -> Json<RoomDraft> {
    draft.on_room_type_change();
    Json(draft)
}
