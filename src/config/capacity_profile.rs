// ==========================================
// 车间作业排程系统 - 产能配置外部表示
// ==========================================
// 职责: 定义设置界面提交的产能配置形状
// 红线: 只做形状解析,字段校验属于入口层校验器
// ==========================================

use crate::domain::settings::DEFAULT_WEEKDAY_CAPACITY_HOURS;
use serde::{Deserialize, Serialize};

/// 工作日产能形状
///
/// 兼容两种历史形状:
/// - 周一..周五各一项 (当前形状)
/// - 单一"每日产能"数值 (旧形状,展开到五个工作日)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeekdayCapacityShape {
    PerWeekday([f64; 5]),
    Uniform(f64),
}

impl WeekdayCapacityShape {
    /// 展开为周一..周五的五个产能值
    pub fn to_weekday_hours(&self) -> [f64; 5] {
        match self {
            WeekdayCapacityShape::PerWeekday(hours) => *hours,
            WeekdayCapacityShape::Uniform(hours) => [*hours; 5],
        }
    }
}

impl Default for WeekdayCapacityShape {
    fn default() -> Self {
        WeekdayCapacityShape::PerWeekday([DEFAULT_WEEKDAY_CAPACITY_HOURS; 5])
    }
}

/// 按日覆写条目 (线格式: 日期为 YYYY-MM-DD 字符串)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityOverrideEntry {
    /// 覆写日期 (必须是工作日,入口层校验)
    pub date: String,

    /// 覆写产能 (小时, >= 0)
    pub hours: f64,
}

/// 产能配置 (设置界面提交的外部表示)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CapacityProfile {
    /// 工作日产能 (新旧两种形状均可)
    #[serde(default)]
    pub daily_capacity: WeekdayCapacityShape,

    /// 按日覆写列表
    #[serde(default)]
    pub overrides: Vec<CapacityOverrideEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_weekday_shape_parses() {
        let json = r#"{"daily_capacity":[8.0,8.0,6.0,8.0,4.0],"overrides":[]}"#;
        let profile: CapacityProfile = serde_json::from_str(json).unwrap();
        assert_eq!(
            profile.daily_capacity.to_weekday_hours(),
            [8.0, 8.0, 6.0, 8.0, 4.0]
        );
    }

    #[test]
    fn test_legacy_uniform_shape_parses() {
        // 旧形状: 单一每日产能数值
        let json = r#"{"daily_capacity":7.5}"#;
        let profile: CapacityProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.daily_capacity.to_weekday_hours(), [7.5; 5]);
        assert!(profile.overrides.is_empty());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let profile: CapacityProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.daily_capacity.to_weekday_hours(), [8.0; 5]);
    }

    #[test]
    fn test_override_entries_parse() {
        let json = r#"{"daily_capacity":8.0,"overrides":[{"date":"2026-08-05","hours":0.0}]}"#;
        let profile: CapacityProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.overrides.len(), 1);
        assert_eq!(profile.overrides[0].date, "2026-08-05");
        assert_eq!(profile.overrides[0].hours, 0.0);
    }
}
