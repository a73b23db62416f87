// ==========================================
// 车间作业排程系统 - 作业领域模型
// ==========================================
// 职责: 定义作业实体与排程片段
// 红线: scheduled_segments 只能被整体替换,不可原地修补
// ==========================================

use crate::domain::types::ActivityType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ScheduledSegment - 排程片段
// ==========================================
// 表示作业在某个工作日上落位的小时数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledSegment {
    pub date: NaiveDate, // 落位日期 (仅工作日)
    pub hours: f64,      // 落位小时数 (> 0)
}

// ==========================================
// Job - 作业
// ==========================================
// 会话内持久实体; scheduled_segments 由最近一次分配运行完整推导
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    // ===== 标识 =====
    pub id: String,   // 作业ID (唯一、稳定)
    pub name: String, // 作业名称

    // ===== 排程输入 =====
    pub required_hours: f64,                    // 所需工时 (> 0)
    pub is_urgent: bool,                        // 是否加急
    pub preferred_start_date: Option<NaiveDate>,// 期望开始日期 (仅工作日)

    // ===== 业务标签 =====
    pub activity_type: ActivityType,        // 作业类型
    pub activity_detail: Option<String>,    // 类型补充说明 (activity_type=OTHER 时有意义)
    pub quote_number: Option<String>,       // 报价单号

    // ===== 展示属性 =====
    pub color: String, // 展示颜色 (对算法无语义)

    // ===== 分配输出 =====
    // 仅由 HourAllocator 或优化器合并整体替换
    #[serde(default)]
    pub scheduled_segments: Vec<ScheduledSegment>,
}

impl Job {
    /// 已落位的总工时
    pub fn total_scheduled_hours(&self) -> f64 {
        self.scheduled_segments.iter().map(|s| s.hours).sum()
    }

    /// 是否已完整排入 (浮点容差内)
    pub fn is_fully_scheduled(&self) -> bool {
        self.total_scheduled_hours() >= self.required_hours - 1e-9
    }
}
