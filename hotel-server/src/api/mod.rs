//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`rooms`] - 客房管理接口
//! - [`floors`] - 楼层管理接口
//! - [`amenities`] - 设施管理接口
//! - [`taxes`] - 税率管理接口
//! - [`uoms`] - 计量单位接口
//! - [`hotel_info`] - 酒店信息接口
//! - [`audit_log`] - 审计日志接口
//! - [`upload`] - 图片上传接口

pub mod amenities;
pub mod audit_log;
pub mod floors;
pub mod health;
pub mod hotel_info;
pub mod rooms;
pub mod taxes;
pub mod uoms;
pub mod upload;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(rooms::router())
        .merge(floors::router())
        .merge(amenities::router())
        .merge(taxes::router())
        .merge(uoms::router())
        .merge(hotel_info::router())
        .merge(audit_log::router())
        .merge(upload::router())
}

/// Build a fully configured application with all middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging - outermost, executed first
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
