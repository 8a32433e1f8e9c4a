// ==========================================
// SchedulingApi / ReportApi 集成测试
// ==========================================
// 测试目标: 验证排班与报表接口的端到端行为
// ==========================================

mod helpers;

use chrono::{Month, Weekday};
use helpers::test_data_builder::{InspectorBuilder, RosterBuilder};
use inspection_scheduler::api::{ApiError, ReportApi, ReportRequest, SchedulingApi};
use inspection_scheduler::domain::inspector::InspectorConfigUpdate;
use inspection_scheduler::domain::{DistributionMode, PlanningPeriod, SheetStatus, WorkloadStatus};
use inspection_scheduler::logging;

// ==========================================
// 自动均衡
// ==========================================

#[test]
fn test_smart_balance_flattens_areas_in_order() {
    logging::init_test();
    let roster = RosterBuilder::new()
        .active_inspectors(2)
        .area("North", 2, 1)
        .area("South", 2, 1)
        .build();

    let result = SchedulingApi::default()
        .run_smart_balance(&roster, PlanningPeriod::Yearly)
        .unwrap();

    assert!(result.applied);
    assert_eq!(result.inspectors[0].location_queue, vec!["L1", "L3"]);
    assert_eq!(result.inspectors[1].location_queue, vec!["L2", "L4"]);
    // 原快照不变
    assert!(roster.inspectors.iter().all(|i| i.location_queue.is_empty()));
}

#[test]
fn test_smart_balance_without_active_is_noop() {
    let roster = RosterBuilder::new()
        .inspector(InspectorBuilder::new("I1").inactive().queue(&["L2"]).build())
        .area("North", 3, 0)
        .build();

    let result = SchedulingApi::default()
        .run_smart_balance(&roster, PlanningPeriod::Weekly)
        .unwrap();

    assert!(!result.applied);
    assert_eq!(result.inspectors, roster.inspectors);
}

// ==========================================
// 配置编辑
// ==========================================

#[test]
fn test_update_inspector_config() {
    let roster = RosterBuilder::new().active_inspectors(2).build();
    let update = InspectorConfigUpdate {
        preferred_day: Some(Weekday::Tue),
        max_locations_per_day: Some(12),
    };

    let updated = SchedulingApi::default()
        .update_inspector_config(&roster, "I2", &update)
        .unwrap();

    assert_eq!(updated.inspectors[1].preferred_day, Weekday::Tue);
    assert_eq!(updated.inspectors[1].max_locations_per_day, 12);
    assert_eq!(updated.inspectors[0], roster.inspectors[0]);
}

#[test]
fn test_update_inspector_config_rejects_out_of_range() {
    let roster = RosterBuilder::new().active_inspectors(1).build();
    let api = SchedulingApi::default();

    for bad in [0, 51] {
        let update = InspectorConfigUpdate {
            preferred_day: None,
            max_locations_per_day: Some(bad),
        };
        let err = api.update_inspector_config(&roster, "I1", &update).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
}

#[test]
fn test_update_inspector_config_unknown_id() {
    let roster = RosterBuilder::new().active_inspectors(1).build();
    let update = InspectorConfigUpdate {
        preferred_day: Some(Weekday::Mon),
        max_locations_per_day: None,
    };

    let err = SchedulingApi::default()
        .update_inspector_config(&roster, "NOPE", &update)
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test]
fn test_update_inspector_config_requires_change() {
    let roster = RosterBuilder::new().active_inspectors(1).build();
    let err = SchedulingApi::default()
        .update_inspector_config(&roster, "I1", &InspectorConfigUpdate::default())
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

// ==========================================
// 工作量概览
// ==========================================

#[test]
fn test_workload_overview_after_weekly_balance() {
    let roster = RosterBuilder::new()
        .active_inspectors(2)
        .inspector(InspectorBuilder::new("I3").inactive().build())
        .area("Central", 10, 0)
        .build();
    let api = SchedulingApi::default();

    let result = api.run_smart_balance(&roster, PlanningPeriod::Weekly).unwrap();
    let balanced = roster.with_inspectors(result.inspectors);
    let overview = api.workload_overview(&balanced, PlanningPeriod::Weekly);

    // avg = 10 / 2 = 5, 每人 2 个 → 不足
    assert_eq!(overview.len(), 3);
    assert!(overview.iter().all(|s| s.status == WorkloadStatus::Underloaded));
    assert_eq!(overview[0].visits_per_month, 2);
}

// ==========================================
// 报表
// ==========================================

#[test]
fn test_yearly_report_end_to_end() {
    let roster = RosterBuilder::new()
        .inspector(InspectorBuilder::new("I1").name("Omar Al Said").build())
        .area("North", 14, 2)
        .build();
    let scheduling = SchedulingApi::default();
    let balanced = roster.with_inspectors(
        scheduling
            .run_smart_balance(&roster, PlanningPeriod::Yearly)
            .unwrap()
            .inspectors,
    );

    let mut request = ReportRequest::yearly("I1", 2026);
    request.selected_month = Month::February;
    let report = ReportApi::default().build_report(&balanced, &request).unwrap();

    assert_eq!(report.file_name, "ANNUAL_PLAN_2026_Omar_Al_Said.pdf");
    assert_eq!(report.buckets.buckets.len(), 12);
    assert_eq!(report.buckets.buckets[0].location_ids, vec!["L1", "L2"]);
    assert_eq!(report.buckets.totals.site_count, 14);
    assert_eq!(report.buckets.totals.workforce_count, 28);

    let dashboard = report.dashboard.expect("yearly report has dashboard");
    assert_eq!(dashboard.rows.len(), 12);
    assert_eq!(dashboard.avg_sites_display(), "1.2");
    assert_eq!(dashboard.total_workforce_reach, 28);

    assert_eq!(report.sheets.len(), 12);
    let feb = &report.sheets[1];
    assert_eq!(feb.label, "February");
    assert_eq!(feb.status, SheetStatus::Active);
    assert_eq!(feb.entries.len(), 2);
    assert_eq!(report.sheets[0].status, SheetStatus::Planned);
}

#[test]
fn test_monthly_report_single_bucket_full_queue() {
    let roster = RosterBuilder::new()
        .inspector(InspectorBuilder::new("I1").queue(&["L1", "L2", "L3"]).build())
        .area("North", 3, 1)
        .build();
    let request = ReportRequest {
        inspector_id: "I1".to_string(),
        report_type: PlanningPeriod::Monthly,
        mode: DistributionMode::Strict,
        year: 2026,
        selected_month: Month::May,
    };

    let report = ReportApi::default().build_report(&roster, &request).unwrap();

    assert!(report.dashboard.is_none());
    assert_eq!(report.buckets.buckets.len(), 1);
    assert_eq!(report.buckets.buckets[0].label, "May");
    assert_eq!(report.buckets.buckets[0].location_ids, vec!["L1", "L2", "L3"]);
    assert_eq!(report.sheets.len(), 1);
    assert!(report.sheets[0].is_current);
}

#[test]
fn test_weekly_report_keeps_empty_sheet() {
    let roster = RosterBuilder::new()
        .inspector(InspectorBuilder::new("I1").build())
        .build();
    let request = ReportRequest {
        inspector_id: "I1".to_string(),
        report_type: PlanningPeriod::Weekly,
        mode: DistributionMode::Flexible,
        year: 2026,
        selected_month: Month::January,
    };

    let report = ReportApi::default().build_report(&roster, &request).unwrap();
    assert_eq!(report.sheets.len(), 1);
    assert!(report.sheets[0].entries.is_empty());
}

#[test]
fn test_report_unknown_inspector() {
    let roster = RosterBuilder::new().active_inspectors(1).build();
    let err = ReportApi::default()
        .build_report(&roster, &ReportRequest::yearly("I9", 2026))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test]
fn test_report_rejects_invalid_year() {
    let roster = RosterBuilder::new().active_inspectors(1).build();
    let err = ReportApi::default()
        .build_report(&roster, &ReportRequest::yearly("I1", 0))
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}
