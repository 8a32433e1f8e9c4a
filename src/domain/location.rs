// ==========================================
// 巡检排班系统 - 站点与工人领域模型
// ==========================================
// 职责: 站点目录、工人名录及其查找索引
// 红线: 引擎只读,不修改站点/工人数据
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// Location - 站点
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub location_id: String,
    pub name: String,
    pub area: String, // 所属区域名称
    #[serde(default)]
    pub worker_ids: Vec<String>,
}

// ==========================================
// AreaData - 区域及其站点
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaData {
    pub area_name: String,
    #[serde(default)]
    pub locations: Vec<Location>,
}

// ==========================================
// Worker - 工人
// ==========================================
// position/company 缺失时由登记表使用配置默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub worker_id: String,
    pub worker_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

// ==========================================
// LocationCatalog - 站点目录 (有序 + 索引)
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct LocationCatalog {
    locations: Vec<Location>,
    index: HashMap<String, usize>,
}

impl LocationCatalog {
    /// 从站点列表构建目录
    ///
    /// 重复 location_id 仅保留首次出现
    pub fn new(locations: impl IntoIterator<Item = Location>) -> Self {
        let mut catalog = Self::default();
        for location in locations {
            if catalog.index.contains_key(&location.location_id) {
                tracing::warn!(
                    location_id = %location.location_id,
                    "站点ID重复,忽略后续记录"
                );
                continue;
            }
            catalog
                .index
                .insert(location.location_id.clone(), catalog.locations.len());
            catalog.locations.push(location);
        }
        catalog
    }

    /// 按区域顺序展开所有站点
    pub fn from_areas(areas: &[AreaData]) -> Self {
        Self::new(areas.iter().flat_map(|a| a.locations.iter().cloned()))
    }

    pub fn get(&self, location_id: &str) -> Option<&Location> {
        self.index.get(location_id).map(|&i| &self.locations[i])
    }

    /// 有序站点列表 (分配引擎输入)
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

// ==========================================
// WorkerDirectory - 工人名录
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct WorkerDirectory {
    workers: HashMap<String, Worker>,
}

impl WorkerDirectory {
    pub fn new(workers: impl IntoIterator<Item = Worker>) -> Self {
        let mut directory = Self::default();
        for worker in workers {
            directory
                .workers
                .entry(worker.worker_id.clone())
                .or_insert(worker);
        }
        directory
    }

    pub fn get(&self, worker_id: &str) -> Option<&Worker> {
        self.workers.get(worker_id)
    }

    pub fn contains(&self, worker_id: &str) -> bool {
        self.workers.contains_key(worker_id)
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}
