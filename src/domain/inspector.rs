// ==========================================
// 巡检排班系统 - 巡检员领域模型
// ==========================================
// 职责: 巡检员主数据 + 站点队列
// 红线: 队列仅由分配引擎整体替换,或由配置编辑修改
// ==========================================

use crate::domain::types::InspectorStatus;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

// ==========================================
// Inspector - 巡检员
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inspector {
    pub inspector_id: String,   // 巡检员ID
    pub inspector_name: String, // 显示名称
    pub status: InspectorStatus,

    // ===== 站点队列 =====
    // 插入顺序即巡检优先级,不允许重复
    #[serde(default)]
    pub location_queue: Vec<String>,

    // ===== 排班偏好 =====
    pub preferred_day: Weekday,      // 偏好巡检日
    pub max_locations_per_day: u32,  // 每日站点上限 (仅参考,分配引擎不强制)
}

impl Inspector {
    pub fn new(inspector_id: &str, inspector_name: &str, status: InspectorStatus) -> Self {
        Self {
            inspector_id: inspector_id.to_string(),
            inspector_name: inspector_name.to_string(),
            status,
            location_queue: Vec::new(),
            preferred_day: Weekday::Sun,
            max_locations_per_day: 1,
        }
    }

    /// 是否在岗
    pub fn is_active(&self) -> bool {
        self.status == InspectorStatus::Active
    }

    /// 当前队列长度
    pub fn queue_len(&self) -> usize {
        self.location_queue.len()
    }
}

// ==========================================
// InspectorConfigUpdate - 巡检员配置编辑
// ==========================================
// 仅覆写给出的字段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InspectorConfigUpdate {
    #[serde(default)]
    pub preferred_day: Option<Weekday>,
    #[serde(default)]
    pub max_locations_per_day: Option<u32>,
}

impl InspectorConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.preferred_day.is_none() && self.max_locations_per_day.is_none()
    }

    /// 应用到巡检员副本
    pub fn apply_to(&self, inspector: &Inspector) -> Inspector {
        let mut updated = inspector.clone();
        if let Some(day) = self.preferred_day {
            updated.preferred_day = day;
        }
        if let Some(max) = self.max_locations_per_day {
            updated.max_locations_per_day = max;
        }
        updated
    }
}
