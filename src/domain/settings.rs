// ==========================================
// 车间作业排程系统 - 产能设置领域模型
// ==========================================
// 职责: 定义每周工作日产能与按日覆写
// 红线: 覆写优先于工作日默认值; 周末永远零产能
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// 每个工作日的默认产能 (小时)
pub const DEFAULT_WEEKDAY_CAPACITY_HOURS: f64 = 8.0;

// ==========================================
// CapacityOverride - 按日产能覆写
// ==========================================
// 用途: 节假日停工、临时加班等按日例外
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityOverride {
    pub date: NaiveDate, // 覆写日期 (仅工作日,入口层校验)
    pub hours: f64,      // 覆写产能 (小时, >= 0; 0 表示当日停工)
}

// ==========================================
// ScheduleSettings - 排程设置
// ==========================================
// 会话内持久实体; 由设置界面维护
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    // ===== 工作日默认产能 =====
    // 周一..周五各一项 (小时, >= 0)
    pub weekday_capacity: [f64; 5],

    // ===== 按日覆写 =====
    // 日期唯一; 覆写值对其日期具有最终权威 (包括 0)
    #[serde(default)]
    pub capacity_overrides: Vec<CapacityOverride>,
}

impl ScheduleSettings {
    /// 查找指定日期的产能覆写
    ///
    /// # 返回
    /// - `Some(hours)`: 该日期存在覆写
    /// - `None`: 无覆写,使用工作日默认值
    pub fn override_for(&self, date: NaiveDate) -> Option<f64> {
        self.capacity_overrides
            .iter()
            .find(|o| o.date == date)
            .map(|o| o.hours)
    }
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            weekday_capacity: [DEFAULT_WEEKDAY_CAPACITY_HOURS; 5],
            capacity_overrides: Vec::new(),
        }
    }
}
