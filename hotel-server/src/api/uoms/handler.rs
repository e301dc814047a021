//! Unit of Measure API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Uom, UomCreate, UomUpdate};
use crate::db::repository::UomRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/uoms - 获取所有计量单位
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Uom>>> {
    let repo = UomRepository::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/uoms/default - 获取默认计量单位
pub async fn get_default(State(state): State<ServerState>) -> AppResult<Json<Uom>> {
    let repo = UomRepository::new(state.db.clone());
    let id = repo.default_uom().await?;
    let uom = repo
        .find_by_id(&id.to_string())
        .await?
        .ok_or_else(|| AppError::not_found("Default unit of measure"))?;
    Ok(Json(uom))
}

/// GET /api/uoms/:id - 获取单个计量单位
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Uom>> {
    let repo = UomRepository::new(state.db.clone());
    let uom = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Uom {}", id)))?;
    Ok(Json(uom))
}

/// POST /api/uoms - 创建计量单位
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UomCreate>,
) -> AppResult<Json<Uom>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Uom name cannot be empty"));
    }
    let repo = UomRepository::new(state.db.clone());
    Ok(Json(repo.create(payload).await?))
}

/// PUT /api/uoms/:id - 更新计量单位
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<UomUpdate>,
) -> AppResult<Json<Uom>> {
    let repo = UomRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload).await?))
}

/// DELETE /api/uoms/:id - 删除计量单位
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = UomRepository::new(state.db.clone());
    Ok(Json(repo.delete(&id).await?))
}
