// ==========================================
// 车间作业排程系统 - 核心库
// ==========================================
// 系统定位: 小型生产车间的可视化排程核心
// 数据模型: 会话内存状态,无持久化层
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 排程规则
pub mod engine;

// 优化边界层 - 远端优化服务适配
pub mod optimizer;

// 配置层 - 外部配置表示
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 会话操作接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    ActivityType, CapacityOverride, DailyAssignment, DayData, Job, ScheduleMap,
    ScheduleSettings, ScheduledSegment,
};

// 引擎
pub use engine::{
    AllocationResult, AllocationWarning, CapacityResolver, HourAllocator, JobPrioritizer,
};

// 优化边界
pub use optimizer::{OptimizerAdapter, OptimizerClient, OptimizerError};

// API
pub use api::{ApiError, ApiResult, JobDraft, ScheduleApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "车间作业排程系统";

// ==========================================
// 预编译检查
// ==========================================
