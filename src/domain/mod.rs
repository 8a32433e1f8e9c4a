// ==========================================
// 巡检排班系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、报表结构
// 红线: 不含引擎逻辑,不含 I/O
// ==========================================

pub mod inspector;
pub mod location;
pub mod report;
pub mod roster;
pub mod types;

// 重导出核心类型
pub use inspector::{Inspector, InspectorConfigUpdate};
pub use location::{AreaData, Location, LocationCatalog, Worker, WorkerDirectory};
pub use report::{
    AnnualDashboard, Bucket, BucketReport, BucketScheme, BucketTotals, DashboardRow,
    InspectorReport, RegisterEntry, RegisterSheet, RegisterWorkerRow,
};
pub use roster::RosterSnapshot;
pub use types::{
    DistributionMode, InspectorStatus, PlanningPeriod, SheetStatus, WorkloadStatus,
};
