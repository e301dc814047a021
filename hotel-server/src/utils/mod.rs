//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`ApiResponse`] - API 响应结构
//! - 日志等工具

pub mod error;
pub mod logger;
pub mod time;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use time::now_millis;

/// Load `.env` and initialize logging
///
/// Call once at process startup, before [`crate::core::Config::from_env`].
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    logger::init_logger_with_file(level.as_deref(), log_dir.as_deref());
    Ok(())
}
