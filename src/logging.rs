// ==========================================
// 车间作业排程系统 - 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 分配引擎与 ScheduleApi 的入口方法都带 instrument 跨度,
// 逐作业的落位明细在 debug 级别输出
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

// 缺省过滤器: 引擎的逐作业 debug 日志默认关闭
const DEFAULT_FILTER: &str = "info";

// 测试过滤器: 固定打开本库 debug 日志,便于核对分配轨迹
const TEST_FILTER: &str = "workshop_scheduler=debug";

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=workshop_scheduler::engine=debug 查看
///   HourAllocator 的逐作业分配明细
///
/// # 示例
/// ```no_run
/// use workshop_scheduler::logging;
/// logging::init();
/// ```
pub fn init() {
    // 从环境变量读取日志级别，默认为 info
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // 配置日志格式 (单进程会话工具,不输出线程ID)
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 打开本库的 debug 级别 (含周末顺延/日期回退警告与逐作业明细)
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new(TEST_FILTER))
        .with_test_writer()
        .try_init();
}
