// ==========================================
// 巡检排班系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换配置层错误为用户可读的消息
// ==========================================

use crate::config::ConfigError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

impl ApiError {
    pub fn inspector_not_found(inspector_id: &str) -> Self {
        ApiError::NotFound(format!("巡检员(id={})不存在", inspector_id))
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
