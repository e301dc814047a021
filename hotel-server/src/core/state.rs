use std::path::PathBuf;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::audit::AuditService;
use crate::core::Config;
use crate::db::DbService;

/// 服务器状态 - 持有所有服务的单例引用
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | audit | AuditService | 审计日志服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 审计日志服务
    pub audit: AuditService,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/hotel.db，含参考数据种子)
    /// 3. 审计服务 (记录系统启动)
    pub async fn initialize(config: &Config) -> Result<Self, crate::utils::AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| crate::utils::AppError::internal(format!("work dir: {e}")))?;

        let db_path = config.database_dir().join("hotel.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;
        let db = db_service.db;

        let audit = AuditService::new(db.clone(), config.enable_audit_log);
        if let Err(e) = audit.system_startup().await {
            tracing::warn!("Failed to record startup audit entry: {e}");
        }

        Ok(Self {
            config: config.clone(),
            db,
            audit,
        })
    }

    /// In-memory state for tests
    pub async fn for_tests(config: Config) -> Result<Self, crate::utils::AppError> {
        let db_service = DbService::memory().await?;
        let db = db_service.db;
        let audit = AuditService::new(db.clone(), config.enable_audit_log);
        Ok(Self {
            config,
            db,
            audit,
        })
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取工作目录
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    /// 获取图片目录
    pub fn images_dir(&self) -> PathBuf {
        self.config.images_dir()
    }
}
