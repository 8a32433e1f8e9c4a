// ==========================================
// 巡检排班系统 - 报表 API
// ==========================================
// 职责: 按报表类型与分配模式生成单个巡检员的分桶结果、
//       逐月登记表与年度看板
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::PlannerSettings;
use crate::domain::report::{BucketScheme, InspectorReport};
use crate::domain::roster::RosterSnapshot;
use crate::domain::types::{DistributionMode, PlanningPeriod};
use crate::engine::{export_file_name, Bucketizer, RegisterBuilder};
use chrono::Month;
use serde::{Deserialize, Serialize};

/// 报表请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub inspector_id: String,
    pub report_type: PlanningPeriod,
    pub mode: DistributionMode,
    pub year: i32,
    pub selected_month: Month,
}

impl ReportRequest {
    /// 年度严格分配报表,默认选中一月
    pub fn yearly(inspector_id: &str, year: i32) -> Self {
        Self {
            inspector_id: inspector_id.to_string(),
            report_type: PlanningPeriod::Yearly,
            mode: DistributionMode::Strict,
            year,
            selected_month: Month::January,
        }
    }
}

pub struct ReportApi {
    bucketizer: Bucketizer,
    register: RegisterBuilder,
}

impl ReportApi {
    pub fn new(settings: &PlannerSettings) -> Self {
        Self {
            bucketizer: Bucketizer::new(),
            register: RegisterBuilder::new(settings.register.clone()),
        }
    }

    /// 生成单个巡检员报表
    ///
    /// - Yearly: 12 个月分桶 + 年度看板
    /// - Weekly/Monthly: 仅选中月份一个分桶,不生成看板
    pub fn build_report(
        &self,
        roster: &RosterSnapshot,
        request: &ReportRequest,
    ) -> ApiResult<InspectorReport> {
        if request.year <= 0 {
            return Err(ApiError::InvalidInput(format!("年份无效: {}", request.year)));
        }
        let inspector = roster
            .find_inspector(&request.inspector_id)
            .ok_or_else(|| ApiError::inspector_not_found(&request.inspector_id))?;

        let catalog = roster.location_catalog();
        let workers = roster.worker_directory();
        let scheme = BucketScheme::for_period(request.report_type, request.selected_month);

        let buckets = self.bucketizer.bucketize(
            &inspector.location_queue,
            &catalog,
            &workers,
            &scheme,
            request.mode,
        );

        let dashboard = match request.report_type {
            PlanningPeriod::Yearly => Some(self.register.build_dashboard(&buckets, request.year)),
            PlanningPeriod::Weekly | PlanningPeriod::Monthly => None,
        };

        let sheets = self.register.build_sheets(
            &buckets,
            request.report_type,
            request.year,
            request.selected_month.name(),
            &catalog,
            &workers,
        );

        tracing::info!(
            inspector_id = %inspector.inspector_id,
            report_type = %request.report_type,
            mode = %request.mode,
            sheets = sheets.len(),
            "报表生成完成"
        );

        Ok(InspectorReport {
            inspector_id: inspector.inspector_id.clone(),
            inspector_name: inspector.inspector_name.clone(),
            report_type: request.report_type,
            file_name: export_file_name(request.year, &inspector.inspector_name),
            buckets,
            dashboard,
            sheets,
        })
    }
}

impl Default for ReportApi {
    fn default() -> Self {
        Self::new(&PlannerSettings::default())
    }
}
