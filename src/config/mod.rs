// ==========================================
// 巡检排班系统 - 配置层
// ==========================================
// 职责: 配置管理,支持文件加载与逐项覆写
// ==========================================

pub mod config_manager;
pub mod error;
pub mod settings;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager, CONFIG_PATH_ENV};
pub use error::{ConfigError, ConfigResult};
pub use settings::{PeriodLimits, PlannerSettings, RegisterDefaults, WorkloadThresholds};
