// ==========================================
// 车间作业排程系统 - 日程领域模型
// ==========================================
// 职责: 定义按日的分配快照结构
// 红线: 派生数据,每次分配运行整体重建,不可增量修补
// ==========================================

use crate::domain::job::Job;
use crate::domain::types::ActivityType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// 日程映射: 工作日日期 -> 当日分配
// BTreeMap 保证日期升序遍历,输出稳定
pub type ScheduleMap = BTreeMap<NaiveDate, DayData>;

// ==========================================
// DailyAssignment - 单日分配快照
// ==========================================
// 快照字段从 Job 复制,日历渲染无需回查作业列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAssignment {
    // ===== 作业标识 =====
    pub job_id: String,        // 作业ID
    pub hours_assigned: f64,   // 当日分配小时数 (> 0)

    // ===== 展示快照 =====
    pub job_name: String,                // 作业名称快照
    pub is_urgent: bool,                 // 加急标志快照
    pub activity_type: ActivityType,     // 作业类型快照
    pub quote_number: Option<String>,    // 报价单号快照
    pub color: String,                   // 展示颜色快照
}

impl DailyAssignment {
    /// 从作业构造分配快照
    pub fn from_job(job: &Job, hours_assigned: f64) -> Self {
        Self {
            job_id: job.id.clone(),
            hours_assigned,
            job_name: job.name.clone(),
            is_urgent: job.is_urgent,
            activity_type: job.activity_type,
            quote_number: job.quote_number.clone(),
            color: job.color.clone(),
        }
    }
}

// ==========================================
// DayData - 单日分配汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DayData {
    pub assignments: Vec<DailyAssignment>, // 当日分配列表 (按处理顺序)
    pub total_hours_assigned: f64,         // 当日已分配小时数 (= 分配之和)
}

impl DayData {
    /// 追加一条分配并同步汇总值
    pub fn push_assignment(&mut self, assignment: DailyAssignment) {
        self.total_hours_assigned += assignment.hours_assigned;
        self.assignments.push(assignment);
    }

    /// 当日剩余可用产能
    ///
    /// # 参数
    /// - `capacity_hours`: 当日有效产能
    pub fn remaining_hours(&self, capacity_hours: f64) -> f64 {
        (capacity_hours - self.total_hours_assigned).max(0.0)
    }
}
