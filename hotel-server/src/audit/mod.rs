//! 审计日志模块 — 防篡改变更追踪
//!
//! # 架构
//!
//! ```text
//! 跟踪字段变更 (status, floor, responsible, room_type, num_person)
//!   └─ AuditService::room_updated() → diff → SurrealDB (audit_log 表)
//!
//! SHA256 哈希链: genesis → entry₁ → entry₂ → ... → entryₙ
//! ```
//!
//! - **SHA256 哈希链**: 每条记录包含前一条的哈希
//! - **Append-only**: 无删除/更新接口
//! - **链验证 API**: 可随时验证完整性

pub mod diff;
pub mod service;
pub mod storage;
pub mod types;

pub use diff::diff_room;
pub use service::AuditService;
pub use storage::{AuditStorage, AuditStorageError};
pub use types::{
    AuditAction, AuditChainBreak, AuditChainVerification, AuditEntry, AuditListResponse,
    AuditQuery, FieldChange,
};
