// ==========================================
// 车间作业排程系统 - 产能解析引擎
// ==========================================
// 职责: 解析某一日期的有效产能
// 输入: 日期 + 排程设置
// 输出: 有效产能 (小时, >= 0)
// 红线: 覆写 > 工作日默认值 > 周末零产能
// ==========================================

use crate::domain::settings::ScheduleSettings;
use crate::engine::calendar::weekday_index;
use chrono::NaiveDate;

// ==========================================
// CapacityResolver - 产能解析引擎
// ==========================================
pub struct CapacityResolver {
    // 无状态引擎,不需要注入依赖
}

impl CapacityResolver {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 解析指定日期的有效产能
    ///
    /// 解析顺序:
    /// 1) 周末 -> 0 (永远不排程)
    /// 2) 存在按日覆写 -> 覆写值 (即使为 0,覆写具有最终权威)
    /// 3) 否则 -> 该工作日的默认产能
    ///
    /// # 参数
    /// - `date`: 目标日期
    /// - `settings`: 排程设置
    ///
    /// # 返回
    /// 有效产能 (小时, >= 0); 纯函数,无副作用
    pub fn resolve(&self, date: NaiveDate, settings: &ScheduleSettings) -> f64 {
        let Some(index) = weekday_index(date) else {
            return 0.0;
        };

        if let Some(hours) = settings.override_for(date) {
            return hours.max(0.0);
        }

        settings.weekday_capacity[index].max(0.0)
    }
}

impl Default for CapacityResolver {
    fn default() -> Self {
        Self::new()
    }
}
