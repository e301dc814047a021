//! Floor API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Floor, FloorCreate, FloorUpdate};
use crate::db::repository::FloorRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/floors - 获取所有楼层
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Floor>>> {
    let repo = FloorRepository::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/floors/:id - 获取单个楼层
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Floor>> {
    let repo = FloorRepository::new(state.db.clone());
    let floor = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Floor {}", id)))?;
    Ok(Json(floor))
}

/// POST /api/floors - 创建楼层
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FloorCreate>,
) -> AppResult<Json<Floor>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Floor name cannot be empty"));
    }
    let repo = FloorRepository::new(state.db.clone());
    Ok(Json(repo.create(payload).await?))
}

/// PUT /api/floors/:id - 更新楼层
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<FloorUpdate>,
) -> AppResult<Json<Floor>> {
    let repo = FloorRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload).await?))
}

/// DELETE /api/floors/:id - 删除楼层
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = FloorRepository::new(state.db.clone());
    Ok(Json(repo.delete(&id).await?))
}
