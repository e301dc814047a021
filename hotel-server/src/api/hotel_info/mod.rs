//! Hotel Info API 模块（单例配置）

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/hotel-info",
        get(handler::get).put(handler::update),
    )
}
