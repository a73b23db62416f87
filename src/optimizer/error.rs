// ==========================================
// 车间作业排程系统 - 优化服务错误类型
// ==========================================
// 职责: 定义优化服务调用边界的错误类型
// ==========================================

use thiserror::Error;

/// 优化服务调用错误
///
/// 调用失败时不合并任何部分状态,作业列表停留在最近一次
/// 已知良好的分配结果上; 本层不做自动重试。
#[derive(Error, Debug)]
pub enum OptimizerError {
    /// 远端服务失败 (网络/服务端错误)
    #[error("优化服务调用失败: {0}")]
    ServiceFailure(String),

    /// 响应完全不可解析
    #[error("优化服务响应不可解析: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type OptimizerResult<T> = Result<T, OptimizerError>;
