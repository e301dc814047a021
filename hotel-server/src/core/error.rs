use thiserror::Error;

/// Startup/runtime server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库初始化失败: {0}")]
    Database(String),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::utils::AppError> for ServerError {
    fn from(err: crate::utils::AppError) -> Self {
        ServerError::Database(err.to_string())
    }
}

/// 处理器的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
