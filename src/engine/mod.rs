// ==========================================
// 巡检排班系统 - 引擎层
// ==========================================
// 职责: 工作量分配、报表分桶、登记表构建
// 红线: 引擎为纯函数,不做 I/O,不修改输入
// ==========================================

pub mod bucketizer;
pub mod distributor;
pub mod register;
pub mod workload;

// 重导出核心引擎
pub use bucketizer::{strict_slice_bounds, Bucketizer};
pub use distributor::{DistributionResult, WorkloadDistributor};
pub use register::{export_file_name, RegisterBuilder};
pub use workload::{WorkloadAnalyzer, WorkloadSummary};
