// ==========================================
// 车间作业排程系统 - 领域类型定义
// ==========================================
// 职责: 定义跨模块共享的基础类型
// 红线: 不含引擎逻辑,不含校验逻辑
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 作业类型 (Activity Type)
// ==========================================
// 封闭集合; OTHER 允许在 Job.activity_detail 中补充自由文本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Machining,   // 机加工
    Assembly,    // 装配
    Welding,     // 焊接
    Finishing,   // 表面处理
    Maintenance, // 设备维护
    Other,       // 其他 (配合 activity_detail 使用)
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityType::Machining => write!(f, "MACHINING"),
            ActivityType::Assembly => write!(f, "ASSEMBLY"),
            ActivityType::Welding => write!(f, "WELDING"),
            ActivityType::Finishing => write!(f, "FINISHING"),
            ActivityType::Maintenance => write!(f, "MAINTENANCE"),
            ActivityType::Other => write!(f, "OTHER"),
        }
    }
}

impl Default for ActivityType {
    fn default() -> Self {
        ActivityType::Machining
    }
}

// ==========================================
// 常量定义
// ==========================================

// 默认展示颜色 (调色板首位,对排程算法无语义)
pub const DEFAULT_JOB_COLOR: &str = "#4A7FB5";
