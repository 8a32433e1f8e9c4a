// ==========================================
// 巡检排班系统 - 排班 API
// ==========================================
// 职责: 自动均衡分配、巡检员配置编辑、工作量概览
// 说明: 所有操作返回新快照,状态由调用方持有
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::{ConfigManager, PlannerSettings};
use crate::domain::inspector::InspectorConfigUpdate;
use crate::domain::roster::RosterSnapshot;
use crate::domain::types::PlanningPeriod;
use crate::engine::{DistributionResult, WorkloadAnalyzer, WorkloadDistributor, WorkloadSummary};

pub struct SchedulingApi {
    settings: PlannerSettings,
    distributor: WorkloadDistributor,
    analyzer: WorkloadAnalyzer,
}

impl SchedulingApi {
    pub fn new(settings: PlannerSettings) -> Self {
        Self {
            distributor: WorkloadDistributor::new(settings.period_limits),
            analyzer: WorkloadAnalyzer::new(settings.workload),
            settings,
        }
    }

    /// 从配置管理器加载设置; 配置无效时返回 ApiError::Config
    pub fn from_config(manager: &ConfigManager) -> ApiResult<Self> {
        Ok(Self::new(manager.load_settings()?))
    }

    /// 自动均衡: 按区域顺序展开站点后执行分配
    pub fn run_smart_balance(
        &self,
        roster: &RosterSnapshot,
        period: PlanningPeriod,
    ) -> ApiResult<DistributionResult> {
        let catalog = roster.location_catalog();
        tracing::info!(
            period = %period,
            locations = catalog.len(),
            active_inspectors = roster.active_count(),
            "执行自动均衡"
        );
        Ok(self
            .distributor
            .distribute(&roster.inspectors, catalog.locations(), period))
    }

    /// 编辑单个巡检员的排班偏好
    ///
    /// # 返回
    /// - Ok(RosterSnapshot): 新的花名册快照
    /// - Err(NotFound): 巡检员不存在
    /// - Err(InvalidInput): 每日上限超出允许范围或未给出任何修改
    pub fn update_inspector_config(
        &self,
        roster: &RosterSnapshot,
        inspector_id: &str,
        update: &InspectorConfigUpdate,
    ) -> ApiResult<RosterSnapshot> {
        if update.is_empty() {
            return Err(ApiError::InvalidInput("未指定任何修改项".to_string()));
        }
        if let Some(max) = update.max_locations_per_day {
            if !self.settings.max_locations_per_day_allowed(max) {
                let (min, upper) = self.settings.max_locations_per_day_range;
                return Err(ApiError::InvalidInput(format!(
                    "max_locations_per_day={} 超出范围 [{}, {}]",
                    max, min, upper
                )));
            }
        }
        if roster.find_inspector(inspector_id).is_none() {
            return Err(ApiError::inspector_not_found(inspector_id));
        }

        let inspectors = roster
            .inspectors
            .iter()
            .map(|ins| {
                if ins.inspector_id == inspector_id {
                    update.apply_to(ins)
                } else {
                    ins.clone()
                }
            })
            .collect();

        tracing::info!(inspector_id, "巡检员配置已更新");
        Ok(roster.with_inspectors(inspectors))
    }

    /// 工作量概览
    pub fn workload_overview(
        &self,
        roster: &RosterSnapshot,
        period: PlanningPeriod,
    ) -> Vec<WorkloadSummary> {
        let total_locations = roster.location_catalog().len();
        self.analyzer
            .summarize(&roster.inspectors, total_locations, period)
    }
}

impl Default for SchedulingApi {
    fn default() -> Self {
        Self::new(PlannerSettings::default())
    }
}
