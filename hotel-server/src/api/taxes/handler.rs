//! Tax API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Tax, TaxCreate, TaxScope, TaxUpdate};
use crate::db::repository::TaxRepository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Filter by scope (sale | purchase)
    pub scope: Option<TaxScope>,
}

/// GET /api/taxes - 获取所有税率（可选按适用范围过滤）
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Tax>>> {
    let repo = TaxRepository::new(state.db.clone());
    let taxes = match query.scope {
        Some(scope) => repo.find_by_scope(scope).await?,
        None => repo.find_all().await?,
    };
    Ok(Json(taxes))
}

/// GET /api/taxes/:id - 获取单个税率
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Tax>> {
    let repo = TaxRepository::new(state.db.clone());
    let tax = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Tax {}", id)))?;
    Ok(Json(tax))
}

/// POST /api/taxes - 创建税率
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TaxCreate>,
) -> AppResult<Json<Tax>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Tax name cannot be empty"));
    }
    let repo = TaxRepository::new(state.db.clone());
    Ok(Json(repo.create(payload).await?))
}

/// PUT /api/taxes/:id - 更新税率
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TaxUpdate>,
) -> AppResult<Json<Tax>> {
    let repo = TaxRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload).await?))
}

/// DELETE /api/taxes/:id - 删除税率
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = TaxRepository::new(state.db.clone());
    Ok(Json(repo.delete(&id).await?))
}
