//! Hotel Server - 酒店客房管理服务
//!
//! # 架构概述
//!
//! 本模块是 Hotel Server 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储，客房/楼层/税率/计量单位模型
//! - **审计日志** (`audit`): SHA256 哈希链的 append-only 变更追踪
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! hotel-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── api/           # HTTP 路由和处理器
//! ├── audit/         # 审计日志（哈希链）
//! ├── utils/         # 工具函数
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod audit;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use audit::AuditService;
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult, setup_environment};

// Re-export unified error types
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    __  __      __       __
   / / / /___  / /____  / /
  / /_/ / __ \/ __/ _ \/ /
 / __  / /_/ / /_/  __/ /
/_/ /_/\____/\__/\___/_/
   _____
  / ___/___  ______   _____  _____
  \__ \/ _ \/ ___/ | / / _ \/ ___/
 ___/ /  __/ /   | |/ /  __/ /
/____/\___/_/    |___/\___/_/
    "#
    );
}
