// ==========================================
// 车间作业排程系统 - API层错误类型
// ==========================================
// 职责: 定义入口层错误类型,携带可向用户解释的原因
// 红线: 普通排程状态 (周末跳过/满日/未排满) 不是错误
// ==========================================

use crate::optimizer::error::OptimizerError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入校验错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("日期落在周末: {date},建议顺延到 {suggested}")]
    WeekendDate { date: String, suggested: String },

    #[error("覆写日期重复: {0}")]
    DuplicateOverrideDate(String),

    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 优化服务错误
    // ==========================================
    #[error("优化服务错误: {0}")]
    Optimizer(#[from] OptimizerError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
