// ==========================================
// 巡检排班系统 - 领域类型定义
// ==========================================
// 职责: 巡检员状态、计划周期、分配模式等枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 巡检员状态 (Inspector Status)
// ==========================================
// 红线: Inactive 巡检员的队列不参与自动分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InspectorStatus {
    Active,   // 在岗
    Inactive, // 停用
}

impl fmt::Display for InspectorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectorStatus::Active => write!(f, "ACTIVE"),
            InspectorStatus::Inactive => write!(f, "INACTIVE"),
        }
    }
}

// ==========================================
// 计划周期 (Planning Period)
// ==========================================
// 同时决定: 分配上限 + 报表分桶粒度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanningPeriod {
    Weekly,  // 周计划
    Monthly, // 月计划
    Yearly,  // 年度计划 (不设上限, 12 个月分桶)
}

impl fmt::Display for PlanningPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanningPeriod::Weekly => write!(f, "WEEKLY"),
            PlanningPeriod::Monthly => write!(f, "MONTHLY"),
            PlanningPeriod::Yearly => write!(f, "YEARLY"),
        }
    }
}

impl FromStr for PlanningPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WEEKLY" => Ok(PlanningPeriod::Weekly),
            "MONTHLY" => Ok(PlanningPeriod::Monthly),
            "YEARLY" => Ok(PlanningPeriod::Yearly),
            other => Err(format!("未知计划周期: {}", other)),
        }
    }
}

// ==========================================
// 分配模式 (Distribution Mode)
// ==========================================
// Strict: 队列切分为互不重叠的连续片段
// Flexible: 每个分桶都引用完整队列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionMode {
    Strict,
    Flexible,
}

impl fmt::Display for DistributionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionMode::Strict => write!(f, "STRICT"),
            DistributionMode::Flexible => write!(f, "FLEXIBLE"),
        }
    }
}

impl FromStr for DistributionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STRICT" => Ok(DistributionMode::Strict),
            "FLEXIBLE" => Ok(DistributionMode::Flexible),
            other => Err(format!("未知分配模式: {}", other)),
        }
    }
}

// ==========================================
// 工作量状态 (Workload Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkloadStatus {
    Balanced,    // 均衡
    Overloaded,  // 过载
    Underloaded, // 不足
}

impl fmt::Display for WorkloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkloadStatus::Balanced => write!(f, "BALANCED"),
            WorkloadStatus::Overloaded => write!(f, "OVERLOADED"),
            WorkloadStatus::Underloaded => write!(f, "UNDERLOADED"),
        }
    }
}

// ==========================================
// 登记表状态 (Register Sheet Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SheetStatus {
    Active,  // 当前月份
    Planned, // 计划月份
}

impl fmt::Display for SheetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetStatus::Active => write!(f, "ACTIVE"),
            SheetStatus::Planned => write!(f, "PLANNED"),
        }
    }
}
