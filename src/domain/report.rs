// ==========================================
// 巡检排班系统 - 报表领域模型
// ==========================================
// 职责: 分桶方案、分桶结果、登记表与年度看板结构
// 说明: 文档渲染 (PDF/Excel) 仅消费这些结构
// ==========================================

use crate::domain::types::{DistributionMode, PlanningPeriod, SheetStatus};
use chrono::Month;
use serde::{Deserialize, Serialize};

// ==========================================
// BucketScheme - 分桶方案 (有序标签)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketScheme {
    labels: Vec<String>,
}

impl BucketScheme {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// 年度方案: 12 个自然月
    pub fn yearly() -> Self {
        let labels = (1..=12u8)
            .filter_map(|m| Month::try_from(m).ok())
            .map(|m| m.name().to_string())
            .collect();
        Self { labels }
    }

    /// 单周期方案 (周/月视图)
    pub fn single(label: &str) -> Self {
        Self {
            labels: vec![label.to_string()],
        }
    }

    /// 按计划周期选择默认方案
    ///
    /// - Yearly: 12 个月
    /// - Weekly/Monthly: 仅 selected_month 一个分桶
    pub fn for_period(period: PlanningPeriod, selected_month: Month) -> Self {
        match period {
            PlanningPeriod::Yearly => Self::yearly(),
            PlanningPeriod::Weekly | PlanningPeriod::Monthly => Self::single(selected_month.name()),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// ==========================================
// Bucket - 单个分桶
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    /// 原始站点ID切片 (含未解析ID)
    pub location_ids: Vec<String>,
    /// 可解析的站点数
    pub site_count: usize,
    /// 可解析的工人数
    pub workforce_count: usize,
}

impl Bucket {
    pub fn is_empty(&self) -> bool {
        self.location_ids.is_empty()
    }
}

// ==========================================
// BucketTotals - 汇总
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketTotals {
    pub site_count: usize,
    pub workforce_count: usize,
}

// ==========================================
// BucketReport - 分桶结果
// ==========================================
/// 分桶结果
///
/// `totals` 为各分桶计数之和:
/// - Strict: 等于整条队列的计数
/// - Flexible: 每个分桶都包含整条队列,因此为 `分桶数 × 整条队列计数`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketReport {
    pub mode: DistributionMode,
    pub buckets: Vec<Bucket>,
    pub totals: BucketTotals,
}

// ==========================================
// 登记表 (Field Register)
// ==========================================

/// 登记表工人行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterWorkerRow {
    pub row_no: usize,
    pub worker_name: String,
    pub worker_id: String,
    pub position: String,
    pub company: String,
}

/// 登记表站点条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterEntry {
    pub entry_no: usize,
    pub location_id: String,
    pub location_name: String,
    pub area: String,
    pub worker_count: usize,
    pub worker_rows: Vec<RegisterWorkerRow>,
}

/// 单月登记表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterSheet {
    pub label: String,
    pub year: i32,
    pub is_current: bool,
    pub status: SheetStatus,
    pub site_count: usize,
    pub workforce_count: usize,
    pub entries: Vec<RegisterEntry>,
}

// ==========================================
// 年度看板 (Annual Dashboard)
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRow {
    pub label: String,
    pub site_count: usize,
    pub workforce_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualDashboard {
    pub year: i32,
    pub rows: Vec<DashboardRow>,
    pub totals: BucketTotals,
    pub avg_sites_per_bucket: f64,
    pub total_workforce_reach: usize,
}

impl AnnualDashboard {
    /// 展示用平均值 (保留一位小数)
    pub fn avg_sites_display(&self) -> String {
        format!("{:.1}", self.avg_sites_per_bucket)
    }
}

// ==========================================
// InspectorReport - 单个巡检员的完整报表
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectorReport {
    pub inspector_id: String,
    pub inspector_name: String,
    pub report_type: PlanningPeriod,
    pub file_name: String,
    pub buckets: BucketReport,
    pub dashboard: Option<AnnualDashboard>,
    pub sheets: Vec<RegisterSheet>,
}
