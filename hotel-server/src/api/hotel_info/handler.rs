//! Hotel Info API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::{HotelInfo, HotelInfoUpdate};
use crate::db::repository::HotelInfoRepository;
use crate::utils::AppResult;

/// GET /api/hotel-info - 获取酒店信息
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<HotelInfo>> {
    let repo = HotelInfoRepository::new(state.db.clone());
    Ok(Json(repo.get_or_create().await?))
}

/// PUT /api/hotel-info - 更新酒店信息
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<HotelInfoUpdate>,
) -> AppResult<Json<HotelInfo>> {
    let repo = HotelInfoRepository::new(state.db.clone());
    let details = serde_json::to_value(&payload).unwrap_or(serde_json::Value::Null);
    let info = repo.update(payload).await?;

    if let Err(e) = state.audit.hotel_info_changed(details).await {
        tracing::warn!("Failed to record hotel info change: {e}");
    }

    Ok(Json(info))
}
