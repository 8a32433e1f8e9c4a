// ==========================================
// 巡检排班系统 - 花名册快照
// ==========================================
// 职责: 巡检员/区域站点/工人的完整内存数据集
// 说明: 调用方持有并整体替换,引擎只产出新快照
// ==========================================

use crate::domain::inspector::Inspector;
use crate::domain::location::{AreaData, LocationCatalog, Worker, WorkerDirectory};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    #[serde(default)]
    pub inspectors: Vec<Inspector>,
    #[serde(default)]
    pub areas: Vec<AreaData>,
    #[serde(default)]
    pub workers: Vec<Worker>,
}

impl RosterSnapshot {
    pub fn location_catalog(&self) -> LocationCatalog {
        LocationCatalog::from_areas(&self.areas)
    }

    pub fn worker_directory(&self) -> WorkerDirectory {
        WorkerDirectory::new(self.workers.iter().cloned())
    }

    pub fn find_inspector(&self, inspector_id: &str) -> Option<&Inspector> {
        self.inspectors
            .iter()
            .find(|i| i.inspector_id == inspector_id)
    }

    pub fn active_count(&self) -> usize {
        self.inspectors.iter().filter(|i| i.is_active()).count()
    }

    /// 以新的巡检员列表生成快照 (区域/工人沿用)
    pub fn with_inspectors(&self, inspectors: Vec<Inspector>) -> Self {
        Self {
            inspectors,
            areas: self.areas.clone(),
            workers: self.workers.clone(),
        }
    }
}
