// ==========================================
// 巡检排班系统 - 命令行入口
// ==========================================
// 用法:
//   inspection-scheduler <roster.json> [weekly|monthly|yearly] [inspector_id] [strict|flexible]
//
// 读取花名册快照,执行自动均衡并输出 JSON 结果;
// 指定 inspector_id 时附带该巡检员的年度报表 (默认 strict)
// ==========================================

use anyhow::{anyhow, Context};
use chrono::{Datelike, Local};
use inspection_scheduler::api::{ReportApi, ReportRequest, SchedulingApi};
use inspection_scheduler::config::{ConfigManager, PlannerSettings};
use inspection_scheduler::domain::{DistributionMode, PlanningPeriod, RosterSnapshot};
use serde_json::{json, Value};

/// 命令行参数
#[derive(Debug, Clone, PartialEq, Eq)]
struct CliArgs {
    roster_path: String,
    period: PlanningPeriod,
    report_inspector: Option<String>,
    mode: DistributionMode,
}

/// 解析参数 (不含程序名)
fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<CliArgs> {
    let roster_path = args
        .next()
        .ok_or_else(|| anyhow!("缺少花名册文件路径 (roster.json)"))?;
    let period: PlanningPeriod = match args.next() {
        Some(raw) => raw.parse().map_err(|e: String| anyhow!(e))?,
        None => PlanningPeriod::Weekly,
    };
    let report_inspector = args
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let mode: DistributionMode = match args.next() {
        Some(raw) => raw.parse().map_err(|e: String| anyhow!(e))?,
        None => DistributionMode::Strict,
    };

    Ok(CliArgs {
        roster_path,
        period,
        report_inspector,
        mode,
    })
}

/// 执行均衡与报表,组装输出 JSON
fn build_output(
    cli: &CliArgs,
    roster: &RosterSnapshot,
    settings: &PlannerSettings,
    year: i32,
) -> anyhow::Result<Value> {
    let scheduling = SchedulingApi::new(settings.clone());
    let distribution = scheduling.run_smart_balance(roster, cli.period)?;
    let balanced = roster.with_inspectors(distribution.inspectors.clone());
    let workload = scheduling.workload_overview(&balanced, cli.period);

    let report = match &cli.report_inspector {
        Some(inspector_id) => {
            let mut request = ReportRequest::yearly(inspector_id, year);
            request.mode = cli.mode;
            Some(ReportApi::new(settings).build_report(&balanced, &request)?)
        }
        None => None,
    };

    Ok(json!({
        "distribution": distribution,
        "workload": workload,
        "report": report,
    }))
}

fn main() -> anyhow::Result<()> {
    inspection_scheduler::logging::init();

    let cli = parse_args(std::env::args().skip(1))?;

    tracing::info!("{} v{}", inspection_scheduler::APP_NAME, inspection_scheduler::VERSION);

    let settings = ConfigManager::from_env()
        .and_then(|m| m.load_settings())
        .context("加载配置失败")?;

    let raw = std::fs::read_to_string(&cli.roster_path)
        .with_context(|| format!("读取花名册失败: {}", cli.roster_path))?;
    let roster: RosterSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("解析花名册失败: {}", cli.roster_path))?;

    let output = build_output(&cli, &roster, &settings, Local::now().year())?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
