// ==========================================
// 巡检排班系统 - 工作量评估
// ==========================================
// 职责: 以人均站点数为基准,标记巡检员过载/不足/均衡
// ==========================================

use crate::config::WorkloadThresholds;
use crate::domain::inspector::Inspector;
use crate::domain::types::{PlanningPeriod, WorkloadStatus};
use serde::{Deserialize, Serialize};

const MONTHS_PER_YEAR: usize = 12;

/// 单个巡检员的工作量概览
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSummary {
    pub inspector_id: String,
    pub inspector_name: String,
    pub queue_len: usize,
    pub status: WorkloadStatus,
    /// 每月目标巡检数
    pub visits_per_month: usize,
}

pub struct WorkloadAnalyzer {
    thresholds: WorkloadThresholds,
}

impl WorkloadAnalyzer {
    pub fn new(thresholds: WorkloadThresholds) -> Self {
        Self { thresholds }
    }

    /// 人均站点数 (无在岗巡检员时按 1 人计)
    pub fn average_load(total_locations: usize, active_inspectors: usize) -> f64 {
        total_locations as f64 / active_inspectors.max(1) as f64
    }

    pub fn classify(&self, queue_len: usize, average: f64) -> WorkloadStatus {
        let len = queue_len as f64;
        if len > average * self.thresholds.overload_ratio {
            WorkloadStatus::Overloaded
        } else if len < average * self.thresholds.underload_ratio {
            WorkloadStatus::Underloaded
        } else {
            WorkloadStatus::Balanced
        }
    }

    /// Yearly 按 12 个月向上取整,其他周期即队列长度
    pub fn visits_per_month(queue_len: usize, period: PlanningPeriod) -> usize {
        match period {
            PlanningPeriod::Yearly => queue_len.div_ceil(MONTHS_PER_YEAR),
            PlanningPeriod::Weekly | PlanningPeriod::Monthly => queue_len,
        }
    }

    /// 生成所有巡检员 (含停用) 的工作量概览
    pub fn summarize(
        &self,
        inspectors: &[Inspector],
        total_locations: usize,
        period: PlanningPeriod,
    ) -> Vec<WorkloadSummary> {
        let active = inspectors.iter().filter(|i| i.is_active()).count();
        let average = Self::average_load(total_locations, active);

        inspectors
            .iter()
            .map(|ins| WorkloadSummary {
                inspector_id: ins.inspector_id.clone(),
                inspector_name: ins.inspector_name.clone(),
                queue_len: ins.queue_len(),
                status: self.classify(ins.queue_len(), average),
                visits_per_month: Self::visits_per_month(ins.queue_len(), period),
            })
            .collect()
    }
}

impl Default for WorkloadAnalyzer {
    fn default() -> Self {
        Self::new(WorkloadThresholds::default())
    }
}
