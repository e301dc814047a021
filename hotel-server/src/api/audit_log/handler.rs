//! Audit Log API Handlers

use axum::{
    Json,
    extract::{Query, State},
};

use crate::audit::{AuditChainVerification, AuditListResponse, AuditQuery};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/audit-log - 查询审计日志
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<AuditQuery>,
) -> AppResult<Json<AuditListResponse>> {
    let (items, total) = state
        .audit
        .query(&query)
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;
    Ok(Json(AuditListResponse { items, total }))
}

/// GET /api/audit-log/verify - 校验哈希链完整性
pub async fn verify(
    State(state): State<ServerState>,
) -> AppResult<Json<AuditChainVerification>> {
    let verification = state
        .audit
        .storage()
        .verify_chain()
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;
    Ok(Json(verification))
}
