// ==========================================
// 巡检排班系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写、快照
// 存储: 内存 key-value (可由 JSON 文件初始化)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::settings::{PeriodLimits, PlannerSettings, RegisterDefaults, WorkloadThresholds};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

/// 指向配置文件的环境变量
pub const CONFIG_PATH_ENV: &str = "INSPECTION_SCHEDULER_CONFIG";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: BTreeMap<String, String>,
}

impl ConfigManager {
    /// 创建空配置 (全部使用默认值)
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文件加载
    ///
    /// 文件内容为 JSON 对象: {"weekly_limit_per_inspector": 3, ...}
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let manager = Self::from_snapshot(&raw)?;
        tracing::info!(
            path = %path.display(),
            keys = manager.values.len(),
            "配置文件已加载"
        );
        Ok(manager)
    }

    /// 若设置了 INSPECTION_SCHEDULER_CONFIG 则从文件加载,否则使用默认配置
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim()),
            _ => {
                tracing::debug!("未指定配置文件,使用默认配置");
                Ok(Self::new())
            }
        }
    }

    /// 从配置快照恢复
    ///
    /// 值可以是字符串、数字或布尔,统一按字符串存储
    pub fn from_snapshot(snapshot_json: &str) -> ConfigResult<Self> {
        let map: BTreeMap<String, Value> = serde_json::from_str(snapshot_json)?;
        let mut manager = Self::new();
        for (key, value) in map {
            let text = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            manager.values.insert(key, text);
        }
        Ok(manager)
    }

    /// 获取所有配置的快照（JSON格式）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(&self.values)?)
    }

    /// 覆写单个配置项
    pub fn set(&mut self, key: &str, value: impl ToString) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key)
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| default.to_string())
    }

    fn parse_or_default<T: FromStr>(&self, key: &str, default: T) -> ConfigResult<T>
    where
        T::Err: std::fmt::Display,
    {
        match self.get_config_value(key) {
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::invalid(key, format!("{} ({})", e, raw))),
            None => Ok(default),
        }
    }

    // ===== 分配上限 =====

    pub fn get_period_limits(&self) -> ConfigResult<PeriodLimits> {
        let defaults = PeriodLimits::default();
        let weekly = self.parse_or_default(config_keys::WEEKLY_LIMIT, defaults.weekly)?;
        let monthly = self.parse_or_default(config_keys::MONTHLY_LIMIT, defaults.monthly)?;

        // 上限为 0 时分配将静默丢弃全部站点,不允许
        if weekly == 0 {
            return Err(ConfigError::invalid(config_keys::WEEKLY_LIMIT, "必须 >= 1"));
        }
        if monthly == 0 {
            return Err(ConfigError::invalid(config_keys::MONTHLY_LIMIT, "必须 >= 1"));
        }
        Ok(PeriodLimits { weekly, monthly })
    }

    // ===== 工作量阈值 =====

    pub fn get_workload_thresholds(&self) -> ConfigResult<WorkloadThresholds> {
        let defaults = WorkloadThresholds::default();
        let overload_ratio: f64 =
            self.parse_or_default(config_keys::OVERLOAD_RATIO, defaults.overload_ratio)?;
        let underload_ratio: f64 =
            self.parse_or_default(config_keys::UNDERLOAD_RATIO, defaults.underload_ratio)?;

        if !underload_ratio.is_finite() || underload_ratio < 0.0 {
            return Err(ConfigError::invalid(config_keys::UNDERLOAD_RATIO, "必须为非负数"));
        }
        if !overload_ratio.is_finite() || overload_ratio <= underload_ratio {
            return Err(ConfigError::invalid(
                config_keys::OVERLOAD_RATIO,
                format!("必须大于 {}", underload_ratio),
            ));
        }
        Ok(WorkloadThresholds {
            overload_ratio,
            underload_ratio,
        })
    }

    // ===== 登记表 =====

    pub fn get_register_defaults(&self) -> ConfigResult<RegisterDefaults> {
        let defaults = RegisterDefaults::default();
        let max_worker_rows =
            self.parse_or_default(config_keys::REGISTER_MAX_WORKER_ROWS, defaults.max_worker_rows)?;
        if max_worker_rows == 0 {
            return Err(ConfigError::invalid(config_keys::REGISTER_MAX_WORKER_ROWS, "必须 >= 1"));
        }

        let default_position = self.get_config_or_default(
            config_keys::DEFAULT_WORKER_POSITION,
            &defaults.default_position,
        );
        if default_position.is_empty() {
            return Err(ConfigError::invalid(config_keys::DEFAULT_WORKER_POSITION, "不能为空"));
        }
        let default_company = self.get_config_or_default(
            config_keys::DEFAULT_WORKER_COMPANY,
            &defaults.default_company,
        );
        if default_company.is_empty() {
            return Err(ConfigError::invalid(config_keys::DEFAULT_WORKER_COMPANY, "不能为空"));
        }

        Ok(RegisterDefaults {
            max_worker_rows,
            default_position,
            default_company,
        })
    }

    // ===== 每日站点上限范围 =====

    pub fn get_max_locations_per_day_range(&self) -> ConfigResult<(u32, u32)> {
        let min: u32 = self.parse_or_default(config_keys::MAX_LOCATIONS_PER_DAY_MIN, 1)?;
        let max: u32 = self.parse_or_default(config_keys::MAX_LOCATIONS_PER_DAY_MAX, 50)?;
        if min == 0 {
            return Err(ConfigError::invalid(config_keys::MAX_LOCATIONS_PER_DAY_MIN, "必须 >= 1"));
        }
        if max < min {
            return Err(ConfigError::invalid(
                config_keys::MAX_LOCATIONS_PER_DAY_MAX,
                format!("必须 >= {}", min),
            ));
        }
        Ok((min, max))
    }

    /// 解析并校验全部配置
    pub fn load_settings(&self) -> ConfigResult<PlannerSettings> {
        let settings = PlannerSettings {
            period_limits: self.get_period_limits()?,
            workload: self.get_workload_thresholds()?,
            register: self.get_register_defaults()?,
            max_locations_per_day_range: self.get_max_locations_per_day_range()?,
        };
        tracing::debug!(
            weekly_limit = settings.period_limits.weekly,
            monthly_limit = settings.period_limits.monthly,
            "配置解析完成"
        );
        Ok(settings)
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    pub const WEEKLY_LIMIT: &str = "weekly_limit_per_inspector";
    pub const MONTHLY_LIMIT: &str = "monthly_limit_per_inspector";
    pub const OVERLOAD_RATIO: &str = "overload_ratio";
    pub const UNDERLOAD_RATIO: &str = "underload_ratio";
    pub const REGISTER_MAX_WORKER_ROWS: &str = "register_max_worker_rows";
    pub const DEFAULT_WORKER_POSITION: &str = "default_worker_position";
    pub const DEFAULT_WORKER_COMPANY: &str = "default_worker_company";
    pub const MAX_LOCATIONS_PER_DAY_MIN: &str = "max_locations_per_day_min";
    pub const MAX_LOCATIONS_PER_DAY_MAX: &str = "max_locations_per_day_max";
}
