// ==========================================
// 巡检排班系统 - 工作量分配引擎
// ==========================================
// 职责: 按计划周期上限,将站点轮转分配给在岗巡检员
// 输入: 巡检员列表 + 有序站点列表 + 计划周期
// 输出: 新的巡检员列表 (输入不被修改)
// 红线: Inactive 巡检员队列保持不变; 同一站点本轮至多分配一次
// ==========================================

use crate::config::PeriodLimits;
use crate::domain::inspector::Inspector;
use crate::domain::location::Location;
use crate::domain::types::PlanningPeriod;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::instrument;

/// 分配结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionResult {
    /// 新的完整巡检员列表 (调用方应整体替换)
    pub inspectors: Vec<Inspector>,
    /// 因容量耗尽未能分配的站点
    pub unassigned: Vec<String>,
    /// 本次使用的单人上限
    pub limit_per_inspector: usize,
    pub period: PlanningPeriod,
    /// 无在岗巡检员时为 false (结果等于输入)
    pub applied: bool,
}

impl DistributionResult {
    pub fn assigned_count(&self) -> usize {
        self.inspectors
            .iter()
            .filter(|i| i.is_active())
            .map(|i| i.queue_len())
            .sum()
    }
}

// ==========================================
// WorkloadDistributor - 工作量分配引擎
// ==========================================
pub struct WorkloadDistributor {
    limits: PeriodLimits,
}

impl WorkloadDistributor {
    pub fn new(limits: PeriodLimits) -> Self {
        Self { limits }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 轮转分配站点
    ///
    /// 规则：
    /// 1) 无在岗巡检员 → 原样返回
    /// 2) 清空在岗巡检员队列,停用巡检员队列保留
    /// 3) 按站点顺序逐轮遍历在岗巡检员,达到上限者跳过
    /// 4) 某一轮未放入任何站点 (全员满额) → 停止,剩余站点记为未分配
    #[instrument(skip(self, inspectors, locations), fields(
        inspectors_count = inspectors.len(),
        locations_count = locations.len(),
        period = %period
    ))]
    pub fn distribute(
        &self,
        inspectors: &[Inspector],
        locations: &[Location],
        period: PlanningPeriod,
    ) -> DistributionResult {
        let mut result_inspectors = inspectors.to_vec();
        let limit = self.limits.limit_for(period, locations.len());

        // 在岗巡检员在列表中的位置 (保持原顺序)
        let active_slots: Vec<usize> = result_inspectors
            .iter()
            .enumerate()
            .filter(|(_, ins)| ins.is_active())
            .map(|(idx, _)| idx)
            .collect();

        if active_slots.is_empty() {
            tracing::info!("无在岗巡检员,跳过分配");
            return DistributionResult {
                inspectors: result_inspectors,
                unassigned: Vec::new(),
                limit_per_inspector: limit,
                period,
                applied: false,
            };
        }

        for &idx in &active_slots {
            result_inspectors[idx].location_queue.clear();
        }

        // 去重后的待分配站点
        let mut seen: HashSet<&str> = HashSet::with_capacity(locations.len());
        let pending: Vec<&str> = locations
            .iter()
            .map(|l| l.location_id.as_str())
            .filter(|id| {
                let fresh = seen.insert(*id);
                if !fresh {
                    tracing::debug!(location_id = %id, "站点重复出现,忽略");
                }
                fresh
            })
            .collect();

        let mut fill = vec![0usize; active_slots.len()];
        let mut next = 0usize;

        while next < pending.len() {
            let mut placed_in_pass = false;

            for (slot, &idx) in active_slots.iter().enumerate() {
                if next >= pending.len() {
                    break;
                }
                if fill[slot] >= limit {
                    continue;
                }
                result_inspectors[idx]
                    .location_queue
                    .push(pending[next].to_string());
                fill[slot] += 1;
                next += 1;
                placed_in_pass = true;
            }

            if !placed_in_pass {
                break;
            }
        }

        let unassigned: Vec<String> = pending[next..].iter().map(|id| id.to_string()).collect();
        if !unassigned.is_empty() {
            tracing::warn!(
                unassigned = unassigned.len(),
                limit_per_inspector = limit,
                active_inspectors = active_slots.len(),
                "在岗巡检员已全部满额,剩余站点未分配"
            );
        }

        tracing::info!(
            assigned = next,
            active_inspectors = active_slots.len(),
            limit_per_inspector = limit,
            "工作量分配完成"
        );

        DistributionResult {
            inspectors: result_inspectors,
            unassigned,
            limit_per_inspector: limit,
            period,
            applied: true,
        }
    }
}

impl Default for WorkloadDistributor {
    fn default() -> Self {
        Self::new(PeriodLimits::default())
    }
}
