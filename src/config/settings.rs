// ==========================================
// 巡检排班系统 - 配置值对象
// ==========================================
// 职责: 经 ConfigManager 校验后的强类型设置
// 包含: 周期上限、工作量阈值、登记表默认值、每日上限范围
// ==========================================

use crate::domain::types::PlanningPeriod;
use serde::{Deserialize, Serialize};

/// 各计划周期的单人站点上限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodLimits {
    /// 周计划上限
    pub weekly: usize,
    /// 月计划上限
    pub monthly: usize,
}

impl PeriodLimits {
    /// 本次分配的单人上限
    ///
    /// Yearly 不设上限,等价于站点总数
    pub fn limit_for(&self, period: PlanningPeriod, total_locations: usize) -> usize {
        match period {
            PlanningPeriod::Weekly => self.weekly,
            PlanningPeriod::Monthly => self.monthly,
            PlanningPeriod::Yearly => total_locations,
        }
    }
}

impl Default for PeriodLimits {
    fn default() -> Self {
        Self {
            weekly: 2,
            monthly: 8,
        }
    }
}

/// 工作量评估阈值 (相对人均站点数的倍率)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkloadThresholds {
    pub overload_ratio: f64,
    pub underload_ratio: f64,
}

impl Default for WorkloadThresholds {
    fn default() -> Self {
        Self {
            overload_ratio: 1.2,
            underload_ratio: 0.8,
        }
    }
}

/// 登记表默认值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterDefaults {
    /// 每个站点最多列出的工人行数
    pub max_worker_rows: usize,
    pub default_position: String,
    pub default_company: String,
}

impl Default for RegisterDefaults {
    fn default() -> Self {
        Self {
            max_worker_rows: 15,
            default_position: "Cleaner".to_string(),
            default_company: "Safari".to_string(),
        }
    }
}

/// 校验通过后的完整配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerSettings {
    pub period_limits: PeriodLimits,
    pub workload: WorkloadThresholds,
    pub register: RegisterDefaults,
    /// 每日站点上限的允许范围 (含两端)
    pub max_locations_per_day_range: (u32, u32),
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            period_limits: PeriodLimits::default(),
            workload: WorkloadThresholds::default(),
            register: RegisterDefaults::default(),
            max_locations_per_day_range: (1, 50),
        }
    }
}

impl PlannerSettings {
    pub fn max_locations_per_day_allowed(&self, value: u32) -> bool {
        let (min, max) = self.max_locations_per_day_range;
        value >= min && value <= max
    }
}
