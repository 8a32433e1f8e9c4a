// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::Weekday;
use inspection_scheduler::domain::{
    AreaData, Inspector, InspectorStatus, Location, RosterSnapshot, Worker,
};

// ==========================================
// Inspector 构建器
// ==========================================

pub struct InspectorBuilder {
    inspector_id: String,
    inspector_name: String,
    status: InspectorStatus,
    queue: Vec<String>,
    preferred_day: Weekday,
    max_locations_per_day: u32,
}

impl InspectorBuilder {
    pub fn new(inspector_id: &str) -> Self {
        Self {
            inspector_id: inspector_id.to_string(),
            inspector_name: format!("Inspector {}", inspector_id),
            status: InspectorStatus::Active,
            queue: Vec::new(),
            preferred_day: Weekday::Sun,
            max_locations_per_day: 5,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.inspector_name = name.to_string();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.status = InspectorStatus::Inactive;
        self
    }

    pub fn queue(mut self, ids: &[&str]) -> Self {
        self.queue = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> Inspector {
        Inspector {
            inspector_id: self.inspector_id,
            inspector_name: self.inspector_name,
            status: self.status,
            location_queue: self.queue,
            preferred_day: self.preferred_day,
            max_locations_per_day: self.max_locations_per_day,
        }
    }
}

// ==========================================
// Roster 构建器
// ==========================================
// 站点 L1..Ln,每个站点 workers_per_site 名工人 (W{站点}-{序号})

pub struct RosterBuilder {
    inspectors: Vec<Inspector>,
    areas: Vec<AreaData>,
    workers: Vec<Worker>,
    next_location: usize,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self {
            inspectors: Vec::new(),
            areas: Vec::new(),
            workers: Vec::new(),
            next_location: 1,
        }
    }

    pub fn inspector(mut self, inspector: Inspector) -> Self {
        self.inspectors.push(inspector);
        self
    }

    pub fn active_inspectors(mut self, count: usize) -> Self {
        for i in 1..=count {
            self.inspectors
                .push(InspectorBuilder::new(&format!("I{}", i)).build());
        }
        self
    }

    pub fn area(mut self, area_name: &str, locations: usize, workers_per_site: usize) -> Self {
        let mut area = AreaData {
            area_name: area_name.to_string(),
            locations: Vec::new(),
        };
        for _ in 0..locations {
            let n = self.next_location;
            self.next_location += 1;
            let worker_ids: Vec<String> = (1..=workers_per_site)
                .map(|w| format!("W{}-{}", n, w))
                .collect();
            for wid in &worker_ids {
                self.workers.push(Worker {
                    worker_id: wid.clone(),
                    worker_name: format!("Worker {}", wid),
                    position: None,
                    company: None,
                });
            }
            area.locations.push(Location {
                location_id: format!("L{}", n),
                name: format!("Site {}", n),
                area: area_name.to_string(),
                worker_ids,
            });
        }
        self.areas.push(area);
        self
    }

    pub fn build(self) -> RosterSnapshot {
        RosterSnapshot {
            inspectors: self.inspectors,
            areas: self.areas,
            workers: self.workers,
        }
    }
}

/// 生成 L{from}..=L{to} 的站点ID
pub fn location_ids(from: usize, to: usize) -> Vec<String> {
    (from..=to).map(|i| format!("L{}", i)).collect()
}
