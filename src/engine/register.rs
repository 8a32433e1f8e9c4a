// ==========================================
// 巡检排班系统 - 现场登记表构建
// ==========================================
// 职责: 将分桶结果展开为逐月登记表与年度看板
// 输出: 结构化数据,由外部文档渲染 (PDF/Excel) 消费
// ==========================================

use crate::config::RegisterDefaults;
use crate::domain::location::{Location, LocationCatalog, WorkerDirectory};
use crate::domain::report::{
    AnnualDashboard, Bucket, BucketReport, DashboardRow, RegisterEntry, RegisterSheet,
    RegisterWorkerRow,
};
use crate::domain::types::{PlanningPeriod, SheetStatus};

pub struct RegisterBuilder {
    defaults: RegisterDefaults,
}

impl RegisterBuilder {
    pub fn new(defaults: RegisterDefaults) -> Self {
        Self { defaults }
    }

    /// 逐分桶生成登记表
    ///
    /// 年度报表跳过没有可解析站点的月份
    pub fn build_sheets(
        &self,
        report: &BucketReport,
        report_type: PlanningPeriod,
        year: i32,
        current_label: &str,
        locations: &LocationCatalog,
        workers: &WorkerDirectory,
    ) -> Vec<RegisterSheet> {
        report
            .buckets
            .iter()
            .filter(|b| !(report_type == PlanningPeriod::Yearly && b.site_count == 0))
            .map(|bucket| self.build_sheet(bucket, year, current_label, locations, workers))
            .collect()
    }

    fn build_sheet(
        &self,
        bucket: &Bucket,
        year: i32,
        current_label: &str,
        locations: &LocationCatalog,
        workers: &WorkerDirectory,
    ) -> RegisterSheet {
        let is_current = bucket.label == current_label;
        let entries = bucket
            .location_ids
            .iter()
            .filter_map(|id| locations.get(id))
            .enumerate()
            .map(|(idx, location)| self.build_entry(idx + 1, location, workers))
            .collect();

        RegisterSheet {
            label: bucket.label.clone(),
            year,
            is_current,
            status: if is_current {
                SheetStatus::Active
            } else {
                SheetStatus::Planned
            },
            site_count: bucket.site_count,
            workforce_count: bucket.workforce_count,
            entries,
        }
    }

    /// 站点条目; worker_count 只计可解析工人,与分桶 workforce_count 口径一致
    fn build_entry(
        &self,
        entry_no: usize,
        location: &Location,
        workers: &WorkerDirectory,
    ) -> RegisterEntry {
        let worker_rows = location
            .worker_ids
            .iter()
            .take(self.defaults.max_worker_rows)
            .enumerate()
            .map(|(idx, wid)| {
                let worker = workers.get(wid);
                RegisterWorkerRow {
                    row_no: idx + 1,
                    worker_name: worker.map(|w| w.worker_name.clone()).unwrap_or_default(),
                    worker_id: wid.clone(),
                    position: worker
                        .and_then(|w| w.position.clone())
                        .unwrap_or_else(|| self.defaults.default_position.clone()),
                    company: worker
                        .and_then(|w| w.company.clone())
                        .unwrap_or_else(|| self.defaults.default_company.clone()),
                }
            })
            .collect();

        RegisterEntry {
            entry_no,
            location_id: location.location_id.clone(),
            location_name: location.name.clone(),
            area: location.area.clone(),
            worker_count: location
                .worker_ids
                .iter()
                .filter(|wid| workers.contains(wid))
                .count(),
            worker_rows,
        }
    }

    /// 年度看板: 每月一行 + 总计 + 月均站点数
    pub fn build_dashboard(&self, report: &BucketReport, year: i32) -> AnnualDashboard {
        let rows = report
            .buckets
            .iter()
            .map(|b| DashboardRow {
                label: b.label.clone(),
                site_count: b.site_count,
                workforce_count: b.workforce_count,
            })
            .collect();

        let avg_sites_per_bucket = if report.buckets.is_empty() {
            0.0
        } else {
            report.totals.site_count as f64 / report.buckets.len() as f64
        };

        AnnualDashboard {
            year,
            rows,
            totals: report.totals,
            avg_sites_per_bucket,
            total_workforce_reach: report.totals.workforce_count,
        }
    }
}

impl Default for RegisterBuilder {
    fn default() -> Self {
        Self::new(RegisterDefaults::default())
    }
}

/// 导出文件名: ANNUAL_PLAN_{year}_{name}.pdf, 姓名中的空白替换为下划线
pub fn export_file_name(year: i32, inspector_name: &str) -> String {
    let name = inspector_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("ANNUAL_PLAN_{}_{}.pdf", year, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::Worker;
    use crate::domain::report::{BucketScheme, BucketTotals};
    use crate::domain::types::DistributionMode;
    use crate::engine::bucketizer::Bucketizer;

    fn fixture() -> (LocationCatalog, WorkerDirectory) {
        let catalog = LocationCatalog::new(vec![
            Location {
                location_id: "L1".to_string(),
                name: "Main Gate".to_string(),
                area: "North".to_string(),
                worker_ids: (1..=20).map(|i| format!("W{}", i)).collect(),
            },
            Location {
                location_id: "L2".to_string(),
                name: "Clinic".to_string(),
                area: "South".to_string(),
                worker_ids: vec!["W1".to_string(), "W999".to_string()],
            },
        ]);
        let workers = WorkerDirectory::new((1..=20).map(|i| Worker {
            worker_id: format!("W{}", i),
            worker_name: format!("Worker {}", i),
            position: if i == 1 { Some("Supervisor".to_string()) } else { None },
            company: None,
        }));
        (catalog, workers)
    }

    #[test]
    fn test_yearly_sheets_skip_empty_months() {
        let (catalog, workers) = fixture();
        let queue = vec!["L1".to_string(), "L2".to_string()];
        let report = Bucketizer::new().bucketize(
            &queue,
            &catalog,
            &workers,
            &BucketScheme::yearly(),
            DistributionMode::Strict,
        );

        let sheets = RegisterBuilder::default().build_sheets(
            &report,
            PlanningPeriod::Yearly,
            2026,
            "February",
            &catalog,
            &workers,
        );

        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[0].label, "January");
        assert_eq!(sheets[0].status, SheetStatus::Planned);
        assert_eq!(sheets[1].label, "February");
        assert!(sheets[1].is_current);
        assert_eq!(sheets[1].status, SheetStatus::Active);
    }

    #[test]
    fn test_worker_rows_capped_and_defaulted() {
        let (catalog, workers) = fixture();
        let report = Bucketizer::new().bucketize(
            &["L1".to_string(), "L2".to_string()],
            &catalog,
            &workers,
            &BucketScheme::single("March"),
            DistributionMode::Strict,
        );

        let sheets = RegisterBuilder::default().build_sheets(
            &report,
            PlanningPeriod::Monthly,
            2026,
            "March",
            &catalog,
            &workers,
        );
        let entries = &sheets[0].entries;

        assert_eq!(entries[0].entry_no, 1);
        assert_eq!(entries[0].worker_count, 20);
        assert_eq!(entries[0].worker_rows.len(), 15);
        assert_eq!(entries[0].worker_rows[0].position, "Supervisor");
        assert_eq!(entries[0].worker_rows[1].position, "Cleaner");
        assert_eq!(entries[0].worker_rows[1].company, "Safari");

        // 未解析工人: 姓名为空,ID 保留
        let missing = &entries[1].worker_rows[1];
        assert_eq!(missing.worker_name, "");
        assert_eq!(missing.worker_id, "W999");
        assert_eq!(entries[1].worker_count, 1);
        assert_eq!(sheets[0].workforce_count, 21);
    }

    #[test]
    fn test_sheet_workforce_matches_entry_sum() {
        let catalog = LocationCatalog::new(vec![Location {
            location_id: "L1".to_string(),
            name: "Depot".to_string(),
            area: "East".to_string(),
            worker_ids: vec!["W1".to_string(), "W404".to_string(), "W405".to_string()],
        }]);
        let workers = WorkerDirectory::new(vec![Worker {
            worker_id: "W1".to_string(),
            worker_name: "Worker 1".to_string(),
            position: None,
            company: None,
        }]);
        let report = Bucketizer::new().bucketize(
            &["L1".to_string(), "L404".to_string()],
            &catalog,
            &workers,
            &BucketScheme::single("April"),
            DistributionMode::Strict,
        );

        let sheets = RegisterBuilder::default().build_sheets(
            &report,
            PlanningPeriod::Monthly,
            2026,
            "April",
            &catalog,
            &workers,
        );
        let sheet = &sheets[0];
        let entry_sum: usize = sheet.entries.iter().map(|e| e.worker_count).sum();

        assert_eq!(sheet.workforce_count, 1);
        assert_eq!(entry_sum, sheet.workforce_count);
        // 未解析工人仍列出行
        assert_eq!(sheet.entries[0].worker_rows.len(), 3);
    }

    #[test]
    fn test_dashboard_average_over_buckets() {
        let (catalog, workers) = fixture();
        let report = Bucketizer::new().bucketize(
            &["L1".to_string(), "L2".to_string()],
            &catalog,
            &workers,
            &BucketScheme::yearly(),
            DistributionMode::Flexible,
        );

        let dashboard = RegisterBuilder::default().build_dashboard(&report, 2026);

        assert_eq!(dashboard.rows.len(), 12);
        assert_eq!(
            dashboard.totals,
            BucketTotals {
                site_count: 24,
                workforce_count: 12 * 21
            }
        );
        assert_eq!(dashboard.avg_sites_display(), "2.0");
        assert_eq!(dashboard.total_workforce_reach, 12 * 21);
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name(2026, "Omar  Al Said"),
            "ANNUAL_PLAN_2026_Omar_Al_Said.pdf"
        );
    }
}
