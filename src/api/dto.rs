// ==========================================
// 车间作业排程系统 - API层 DTO 定义
// ==========================================
// 职责: 定义入口层的请求与操作结果结构
// ==========================================

use crate::domain::types::ActivityType;
use crate::engine::allocator::AllocationWarning;
use crate::domain::schedule::ScheduleMap;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// JobDraft - 作业录入表单
// ==========================================

/// 作业录入表单 (创建/编辑共用)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDraft {
    /// 作业名称 (必填,非空)
    pub name: String,

    /// 所需工时 (必填, > 0)
    pub required_hours: f64,

    /// 是否加急
    #[serde(default)]
    pub is_urgent: bool,

    /// 作业类型
    #[serde(default)]
    pub activity_type: ActivityType,

    /// 类型补充说明 (activity_type=OTHER 时有意义)
    #[serde(default)]
    pub activity_detail: Option<String>,

    /// 报价单号 (可选)
    #[serde(default)]
    pub quote_number: Option<String>,

    /// 期望开始日期 (可选, YYYY-MM-DD; 周末自动顺延并提示)
    #[serde(default)]
    pub preferred_start_date: Option<String>,

    /// 展示颜色 (可选,缺省取调色板默认值)
    #[serde(default)]
    pub color: Option<String>,
}

// ==========================================
// 操作结果
// ==========================================

/// 拖拽改期结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveJobOutcome {
    /// 作业ID
    pub job_id: String,

    /// 实际生效的目标日期 (周末已顺延)
    pub target_date: NaiveDate,

    /// 目标日期是否因落在周末而被顺延 (供界面提示)
    pub snapped: bool,
}

/// 优化往返结果
#[derive(Debug, Clone)]
pub struct OptimizeOutcome {
    /// 合并并重新分配后的日程
    pub schedule: ScheduleMap,

    /// 重新分配产生的未排满警告
    pub warnings: Vec<AllocationWarning>,

    /// 远端返回的自由文本解释 (透传给界面)
    pub explanation: Option<String>,
}
