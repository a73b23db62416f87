// ==========================================
// 车间作业排程系统 - 引擎层
// ==========================================
// 职责: 实现排程业务规则引擎
// 红线: 引擎只处理已解析的领域类型,字符串校验属于入口层
// ==========================================

pub mod allocator;
pub mod calendar;
pub mod capacity;
pub mod priority;

// 重导出核心引擎
pub use allocator::{
    AllocationResult, AllocationWarning, HourAllocator, ITERATION_BOUND_WEEKDAYS,
};
pub use capacity::CapacityResolver;
pub use priority::JobPrioritizer;
