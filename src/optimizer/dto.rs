// ==========================================
// 车间作业排程系统 - 优化服务 DTO 定义
// ==========================================
// 职责: 定义优化服务调用的请求和响应结构
// 线格式: camelCase JSON, 日期为 YYYY-MM-DD 字符串
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 出站: OptimizerRequest
// ==========================================

/// 优化请求: 当前作业 + 产能配置 + 排程日期的序列化快照
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerRequest {
    /// 作业快照列表
    pub jobs: Vec<OptimizerJobPayload>,

    /// 产能配置快照
    pub capacity: OptimizerCapacityPayload,

    /// 排程起始日期 (YYYY-MM-DD, 工作日)
    pub planning_date: String,

    /// 自由文本约束描述 (随请求传给文本生成服务)
    pub constraints_note: String,
}

/// 作业快照
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerJobPayload {
    pub id: String,
    pub name: String,
    pub required_hours: f64,
    pub is_urgent: bool,
    pub activity_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_detail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_number: Option<String>,

    /// 期望开始日期 (YYYY-MM-DD, 已顺延到工作日)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_start_date: Option<String>,

    /// 当前排程片段
    pub segments: Vec<OptimizerSegment>,
}

/// 产能配置快照
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerCapacityPayload {
    /// 周一..周五默认产能 (小时)
    pub weekday_hours: [f64; 5],

    /// 按日覆写 (已过滤周末日期)
    pub overrides: Vec<OptimizerCapacityOverride>,
}

/// 按日覆写快照
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerCapacityOverride {
    pub date: String, // YYYY-MM-DD
    pub hours: f64,
}

// ==========================================
// 入站: OptimizerResponse
// ==========================================

/// 优化响应: 作业片段列表 + 自由文本解释
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerResponse {
    #[serde(default)]
    pub jobs: Vec<OptimizerJobResult>,

    /// 自由文本解释 (透传给界面展示)
    #[serde(default)]
    pub explanation: Option<String>,
}

/// 单作业优化结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerJobResult {
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub segments: Vec<OptimizerSegment>,

    /// 建议的期望开始日期 (YYYY-MM-DD, 可选)
    #[serde(default)]
    pub preferred_start_date: Option<String>,
}

/// 片段线格式 (出入站共用)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerSegment {
    pub date: String, // YYYY-MM-DD
    pub hours: f64,
}
