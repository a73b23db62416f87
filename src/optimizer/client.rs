// ==========================================
// 车间作业排程系统 - 优化服务客户端接口
// ==========================================
// 职责: 定义远端优化服务的调用接口 (不包含实现)
// 红线: 远端是不透明能力; 传输方式由实现方决定
// ==========================================

use crate::optimizer::dto::{OptimizerRequest, OptimizerResponse};
use crate::optimizer::error::{OptimizerError, OptimizerResult};
use async_trait::async_trait;

// ==========================================
// OptimizerClient Trait
// ==========================================
// 用途: 唯一的异步边界; 单次请求/响应往返
// 实现者: 外部协作方 (文本生成服务的具体客户端)
#[async_trait]
pub trait OptimizerClient: Send + Sync {
    /// 调用远端优化服务
    ///
    /// # 参数
    /// - `request`: 序列化快照 (作业 + 产能配置 + 排程日期)
    ///
    /// # 返回
    /// - `Ok(response)`: 远端返回的作业片段列表与解释
    /// - `Err(OptimizerError)`: 服务失败或响应不可解析; 本层不重试
    async fn optimize(&self, request: &OptimizerRequest) -> OptimizerResult<OptimizerResponse>;
}

// ==========================================
// UnconfiguredOptimizerClient - 未配置占位实现
// ==========================================
// 用途: 会话未接入优化服务时的默认协作方
pub struct UnconfiguredOptimizerClient;

#[async_trait]
impl OptimizerClient for UnconfiguredOptimizerClient {
    async fn optimize(&self, _request: &OptimizerRequest) -> OptimizerResult<OptimizerResponse> {
        Err(OptimizerError::ServiceFailure(
            "未配置优化服务".to_string(),
        ))
    }
}
