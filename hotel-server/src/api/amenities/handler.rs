//! Amenity API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Amenity, AmenityCreate, AmenityUpdate};
use crate::db::repository::AmenityRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/amenities - 获取所有设施
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Amenity>>> {
    let repo = AmenityRepository::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/amenities/:id - 获取单个设施
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Amenity>> {
    let repo = AmenityRepository::new(state.db.clone());
    let amenity = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Amenity {}", id)))?;
    Ok(Json(amenity))
}

/// POST /api/amenities - 创建设施
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AmenityCreate>,
) -> AppResult<Json<Amenity>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Amenity name cannot be empty"));
    }
    let repo = AmenityRepository::new(state.db.clone());
    Ok(Json(repo.create(payload).await?))
}

/// PUT /api/amenities/:id - 更新设施
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AmenityUpdate>,
) -> AppResult<Json<Amenity>> {
    let repo = AmenityRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload).await?))
}

/// DELETE /api/amenities/:id - 删除设施
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = AmenityRepository::new(state.db.clone());
    Ok(Json(repo.delete(&id).await?))
}
