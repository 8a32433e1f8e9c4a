// ==========================================
// 巡检排班系统 - 核心库
// ==========================================
// 职责: 巡检员工作量分配 + 报表分桶聚合
// 系统定位: 纯内存计算,状态由调用方持有
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 分配与分桶
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    DistributionMode, InspectorStatus, PlanningPeriod, SheetStatus, WorkloadStatus,
};

// 领域实体
pub use domain::{
    AreaData, Bucket, BucketReport, BucketScheme, BucketTotals, Inspector, InspectorReport,
    Location, LocationCatalog, RosterSnapshot, Worker, WorkerDirectory,
};

// 引擎
pub use engine::{
    Bucketizer, DistributionResult, RegisterBuilder, WorkloadAnalyzer, WorkloadDistributor,
};

// API
pub use api::{ApiError, ApiResult, ReportApi, ReportRequest, SchedulingApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "巡检排班系统";
