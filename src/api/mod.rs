// ==========================================
// 巡检排班系统 - API 层
// ==========================================
// 职责: 面向展示层的业务接口
// ==========================================

pub mod error;
pub mod report_api;
pub mod scheduling_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use report_api::{ReportApi, ReportRequest};
pub use scheduling_api::SchedulingApi;
