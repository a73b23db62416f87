// ==========================================
// 车间作业排程系统 - 工时分配引擎
// ==========================================
// 职责: 按优先级贪心分配作业工时到逐日日程
// 输入: 作业列表 + 排程设置 + 排程起始日期
// 输出: 日程映射 + 更新后的作业列表 + 警告列表
// 红线: 任何日期的分配总量不得超过当日有效产能
// 红线: 不修改调用方的作业列表,在边界处整体复制
// ==========================================

use crate::domain::job::{Job, ScheduledSegment};
use crate::domain::schedule::{DailyAssignment, ScheduleMap};
use crate::domain::settings::ScheduleSettings;
use crate::engine::calendar::{next_weekday, step_to_next_calendar_day};
use crate::engine::capacity::CapacityResolver;
use crate::engine::priority::JobPrioritizer;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

// 单作业的最大工作日步进数 (约两年)
// 安全阀: 防止病态输入导致无限循环,不是业务规则
pub const ITERATION_BOUND_WEEKDAYS: usize = 730;

// ==========================================
// AllocationWarning - 分配警告
// ==========================================
// 非致命: 作业保留已落位的部分片段,由上层提示缺口
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationWarning {
    pub job_id: String,      // 作业ID
    pub job_name: String,    // 作业名称
    pub unplaced_hours: f64, // 未能落位的工时
}

// ==========================================
// AllocationResult - 分配结果
// ==========================================
// 日程映射由单次分配调用独占构建,调用间不复用
#[derive(Debug, Clone)]
pub struct AllocationResult {
    pub schedule: ScheduleMap,             // 日期 -> 当日分配
    pub jobs: Vec<Job>,                    // 更新后的作业列表 (输入顺序)
    pub warnings: Vec<AllocationWarning>,  // 未排满警告
}

// ==========================================
// HourAllocator - 工时分配引擎
// ==========================================
pub struct HourAllocator {
    sorter: JobPrioritizer,
    resolver: CapacityResolver,
}

impl HourAllocator {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            sorter: JobPrioritizer::new(),
            resolver: CapacityResolver::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行完整分配
    ///
    /// 流程:
    /// 1) 排程起始日期顺延到工作日
    /// 2) 作业按 加急 > 期望日期 > ID 排序
    /// 3) 逐作业贪心填充: 从有效开始日期起逐工作日消耗剩余产能
    ///
    /// 同一日期的产能是跨作业共享资源: 先处理的作业先消耗,
    /// 后处理的作业只能使用余量,优先级由此生效。
    /// 单遍贪心: 已落位的片段不会被回访或压缩。
    ///
    /// # 参数
    /// - `jobs`: 作业列表 (不被修改,内部整体复制)
    /// - `settings`: 排程设置
    /// - `planning_start`: 排程起始日期 (周末自动顺延)
    ///
    /// # 返回
    /// 分配结果; 相同输入必得相同输出
    #[instrument(skip(self, jobs, settings), fields(
        jobs_count = jobs.len(),
        planning_start = %planning_start
    ))]
    pub fn allocate(
        &self,
        jobs: &[Job],
        settings: &ScheduleSettings,
        planning_start: NaiveDate,
    ) -> AllocationResult {
        let planning_start = next_weekday(planning_start);

        info!(
            jobs_count = jobs.len(),
            planning_start = %planning_start,
            "开始执行工时分配"
        );

        // 输入顺序记录: 结果按调用方原始顺序返回
        let input_order: HashMap<String, usize> = jobs
            .iter()
            .enumerate()
            .map(|(index, job)| (job.id.clone(), index))
            .collect();

        let ordered = self.sorter.prioritize(jobs.to_vec());

        let mut schedule = ScheduleMap::new();
        let mut warnings = Vec::new();
        let mut updated_jobs = Vec::with_capacity(ordered.len());

        for mut job in ordered {
            let unplaced = self.allocate_single_job(&mut job, settings, planning_start, &mut schedule);

            if unplaced > 0.0 {
                warn!(
                    job_id = %job.id,
                    job_name = %job.name,
                    unplaced_hours = unplaced,
                    "迭代上限耗尽,作业未能完整排入"
                );
                warnings.push(AllocationWarning {
                    job_id: job.id.clone(),
                    job_name: job.name.clone(),
                    unplaced_hours: unplaced,
                });
            }

            updated_jobs.push(job);
        }

        updated_jobs.sort_by_key(|job| input_order.get(&job.id).copied().unwrap_or(usize::MAX));

        info!(
            scheduled_days = schedule.len(),
            warnings_count = warnings.len(),
            "工时分配完成"
        );

        AllocationResult {
            schedule,
            jobs: updated_jobs,
            warnings,
        }
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 分配单个作业
    ///
    /// # 参数
    /// - `job`: 作业 (片段被重置后逐日填充)
    /// - `settings`: 排程设置
    /// - `planning_start`: 已顺延的排程起始日期
    /// - `schedule`: 运行中的日程映射 (跨作业共享余量)
    ///
    /// # 返回
    /// 未能落位的工时 (0.0 表示完整排入)
    fn allocate_single_job(
        &self,
        job: &mut Job,
        settings: &ScheduleSettings,
        planning_start: NaiveDate,
        schedule: &mut ScheduleMap,
    ) -> f64 {
        job.scheduled_segments.clear();
        let mut remaining = job.required_hours;
        let mut current = self.effective_start_date(job, planning_start);
        let mut steps = 0usize;

        while remaining > 0.0 && steps < ITERATION_BOUND_WEEKDAYS {
            steps += 1;

            // 产能查询前统一顺延到工作日
            current = next_weekday(current);

            let capacity = self.resolver.resolve(current, settings);
            let day = schedule.entry(current).or_default();
            let available = day.remaining_hours(capacity);
            let grant = remaining.min(available);

            if grant > 0.0 {
                job.scheduled_segments.push(ScheduledSegment {
                    date: current,
                    hours: grant,
                });
                day.push_assignment(DailyAssignment::from_job(job, grant));
                remaining -= grant;
            }

            if remaining <= 0.0 {
                break;
            }

            // 满日/停工日不产生片段,仍计入迭代上限
            current = step_to_next_calendar_day(current);
        }

        debug!(
            job_id = %job.id,
            segments = job.scheduled_segments.len(),
            remaining_hours = remaining,
            steps,
            "单作业分配完成"
        );

        remaining.max(0.0)
    }

    /// 作业的有效开始日期
    ///
    /// 期望日期 (顺延后) 不早于排程起始日期时采用期望日期,
    /// 否则采用排程起始日期。
    fn effective_start_date(&self, job: &Job, planning_start: NaiveDate) -> NaiveDate {
        match job.preferred_start_date.map(next_weekday) {
            Some(preferred) if preferred >= planning_start => preferred,
            _ => planning_start,
        }
    }
}

impl Default for HourAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::CapacityOverride;
    use crate::domain::types::{ActivityType, DEFAULT_JOB_COLOR};

    // ==========================================
    // 测试辅助函数
    // ==========================================

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_job(
        id: &str,
        required_hours: f64,
        is_urgent: bool,
        preferred: Option<NaiveDate>,
    ) -> Job {
        Job {
            id: id.to_string(),
            name: format!("作业{}", id),
            required_hours,
            is_urgent,
            preferred_start_date: preferred,
            activity_type: ActivityType::Machining,
            activity_detail: None,
            quote_number: None,
            color: DEFAULT_JOB_COLOR.to_string(),
            scheduled_segments: vec![],
        }
    }

    fn create_test_settings(daily_hours: f64) -> ScheduleSettings {
        ScheduleSettings {
            weekday_capacity: [daily_hours; 5],
            capacity_overrides: vec![],
        }
    }

    // ==========================================
    // 基础功能测试
    // ==========================================

    #[test]
    fn test_single_job_spills_to_next_day() {
        // 16小时作业,每日8小时,周一开始 -> {周一,8},{周二,8}
        let allocator = HourAllocator::new();
        let jobs = vec![create_test_job("J001", 16.0, false, None)];
        let settings = create_test_settings(8.0);
        let monday = ymd(2026, 8, 3);

        let result = allocator.allocate(&jobs, &settings, monday);

        let segments = &result.jobs[0].scheduled_segments;
        assert_eq!(
            segments,
            &vec![
                ScheduledSegment { date: ymd(2026, 8, 3), hours: 8.0 },
                ScheduledSegment { date: ymd(2026, 8, 4), hours: 8.0 },
            ]
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_urgent_job_displaces_normal_job() {
        // 同一期望周一: 加急A占满周一,普通B被推到周二
        let allocator = HourAllocator::new();
        let monday = ymd(2026, 8, 3);
        let jobs = vec![
            create_test_job("JB", 8.0, false, Some(monday)),
            create_test_job("JA", 8.0, true, Some(monday)),
        ];
        let settings = create_test_settings(8.0);

        let result = allocator.allocate(&jobs, &settings, monday);

        // 结果保持输入顺序: [JB, JA]
        let job_b = &result.jobs[0];
        let job_a = &result.jobs[1];
        assert_eq!(job_a.id, "JA");
        assert_eq!(
            job_a.scheduled_segments,
            vec![ScheduledSegment { date: ymd(2026, 8, 3), hours: 8.0 }]
        );
        assert_eq!(
            job_b.scheduled_segments,
            vec![ScheduledSegment { date: ymd(2026, 8, 4), hours: 8.0 }]
        );
    }

    #[test]
    fn test_weekend_planning_start_normalizes_to_monday() {
        // 周六起始 -> 顺延到下周一; 日程里不得出现周末键
        let allocator = HourAllocator::new();
        let jobs = vec![create_test_job("J001", 24.0, false, None)];
        let settings = create_test_settings(8.0);
        let saturday = ymd(2026, 8, 8);

        let result = allocator.allocate(&jobs, &settings, saturday);

        assert_eq!(
            result.jobs[0].scheduled_segments[0].date,
            ymd(2026, 8, 10)
        );
        for date in result.schedule.keys() {
            assert!(
                crate::engine::calendar::is_weekday(*date),
                "日程中出现周末键: {}",
                date
            );
        }
    }

    #[test]
    fn test_zero_override_day_is_skipped() {
        // 周三覆写为0: 当周作业无周三片段,工时顺延到周四/周五
        let allocator = HourAllocator::new();
        let monday = ymd(2026, 8, 3);
        let wednesday = ymd(2026, 8, 5);
        let jobs = vec![create_test_job("J001", 32.0, false, None)];
        let settings = ScheduleSettings {
            weekday_capacity: [8.0; 5],
            capacity_overrides: vec![CapacityOverride { date: wednesday, hours: 0.0 }],
        };

        let result = allocator.allocate(&jobs, &settings, monday);

        let segment_dates: Vec<NaiveDate> = result.jobs[0]
            .scheduled_segments
            .iter()
            .map(|s| s.date)
            .collect();
        assert_eq!(
            segment_dates,
            vec![
                ymd(2026, 8, 3), // 周一
                ymd(2026, 8, 4), // 周二
                ymd(2026, 8, 6), // 周四 (跳过周三)
                ymd(2026, 8, 7), // 周五
            ]
        );
    }

    #[test]
    fn test_fractional_hours_terminate_after_one_day() {
        // 0.1小时作业: 单片段,剩余精确归零
        let allocator = HourAllocator::new();
        let monday = ymd(2026, 8, 3);
        let jobs = vec![create_test_job("J001", 0.1, false, None)];
        let settings = create_test_settings(8.0);

        let result = allocator.allocate(&jobs, &settings, monday);

        assert_eq!(
            result.jobs[0].scheduled_segments,
            vec![ScheduledSegment { date: monday, hours: 0.1 }]
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_zero_capacity_everywhere_hits_bound_with_warning() {
        // 全零产能: 到达迭代上限,片段为空,记录警告,不死循环
        let allocator = HourAllocator::new();
        let monday = ymd(2026, 8, 3);
        let jobs = vec![create_test_job("J001", 8.0, false, None)];
        let settings = create_test_settings(0.0);

        let result = allocator.allocate(&jobs, &settings, monday);

        assert!(result.jobs[0].scheduled_segments.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].job_id, "J001");
        assert_eq!(result.warnings[0].unplaced_hours, 8.0);
    }

    #[test]
    fn test_partial_fill_keeps_placed_segments() {
        // 每日2小时,10小时作业只需5个工作日; 产能半满时保留部分片段
        let allocator = HourAllocator::new();
        let monday = ymd(2026, 8, 3);
        let jobs = vec![
            create_test_job("JA", 8.0, true, None),
            create_test_job("JB", 6.0, false, None),
        ];
        let settings = create_test_settings(4.0);

        let result = allocator.allocate(&jobs, &settings, monday);

        // JA: 周一4 + 周二4; JB: 周三4 + 周四2
        assert_eq!(
            result.jobs[0].scheduled_segments,
            vec![
                ScheduledSegment { date: ymd(2026, 8, 3), hours: 4.0 },
                ScheduledSegment { date: ymd(2026, 8, 4), hours: 4.0 },
            ]
        );
        assert_eq!(
            result.jobs[1].scheduled_segments,
            vec![
                ScheduledSegment { date: ymd(2026, 8, 5), hours: 4.0 },
                ScheduledSegment { date: ymd(2026, 8, 6), hours: 2.0 },
            ]
        );
    }

    #[test]
    fn test_preferred_date_before_planning_start_is_ignored() {
        // 期望日期早于排程起始日期: 从排程起始日期开始
        let allocator = HourAllocator::new();
        let jobs = vec![create_test_job(
            "J001",
            8.0,
            false,
            Some(ymd(2026, 7, 27)),
        )];
        let settings = create_test_settings(8.0);
        let planning_start = ymd(2026, 8, 3);

        let result = allocator.allocate(&jobs, &settings, planning_start);

        assert_eq!(
            result.jobs[0].scheduled_segments,
            vec![ScheduledSegment { date: ymd(2026, 8, 3), hours: 8.0 }]
        );
    }

    #[test]
    fn test_later_preferred_date_delays_start() {
        let allocator = HourAllocator::new();
        let jobs = vec![create_test_job(
            "J001",
            8.0,
            false,
            Some(ymd(2026, 8, 12)),
        )];
        let settings = create_test_settings(8.0);

        let result = allocator.allocate(&jobs, &settings, ymd(2026, 8, 3));

        assert_eq!(
            result.jobs[0].scheduled_segments,
            vec![ScheduledSegment { date: ymd(2026, 8, 12), hours: 8.0 }]
        );
    }

    // ==========================================
    // 不变量测试
    // ==========================================

    #[test]
    fn test_day_totals_match_assignment_sums_and_capacity() {
        let allocator = HourAllocator::new();
        let monday = ymd(2026, 8, 3);
        let jobs = vec![
            create_test_job("JA", 13.0, true, None),
            create_test_job("JB", 7.5, false, Some(ymd(2026, 8, 4))),
            create_test_job("JC", 20.0, false, None),
        ];
        let settings = create_test_settings(8.0);
        let resolver = CapacityResolver::new();

        let result = allocator.allocate(&jobs, &settings, monday);

        for (date, day) in &result.schedule {
            let assignment_sum: f64 = day.assignments.iter().map(|a| a.hours_assigned).sum();
            assert!((day.total_hours_assigned - assignment_sum).abs() < 1e-9);
            assert!(
                day.total_hours_assigned <= resolver.resolve(*date, &settings) + 1e-9,
                "{} 超出当日产能",
                date
            );
        }
    }

    #[test]
    fn test_allocation_is_deterministic() {
        let allocator = HourAllocator::new();
        let monday = ymd(2026, 8, 3);
        let jobs = vec![
            create_test_job("JA", 13.0, true, None),
            create_test_job("JB", 7.5, false, Some(ymd(2026, 8, 4))),
        ];
        let settings = create_test_settings(8.0);

        let first = allocator.allocate(&jobs, &settings, monday);
        let second = allocator.allocate(&jobs, &settings, monday);

        assert_eq!(first.schedule, second.schedule);
        for (a, b) in first.jobs.iter().zip(second.jobs.iter()) {
            assert_eq!(a.scheduled_segments, b.scheduled_segments);
        }
    }

    #[test]
    fn test_input_jobs_are_not_mutated() {
        let allocator = HourAllocator::new();
        let monday = ymd(2026, 8, 3);
        let mut jobs = vec![create_test_job("J001", 8.0, false, None)];
        jobs[0].scheduled_segments = vec![ScheduledSegment {
            date: ymd(2026, 1, 5),
            hours: 1.0,
        }];
        let settings = create_test_settings(8.0);

        let result = allocator.allocate(&jobs, &settings, monday);

        // 调用方列表保持原样; 结果中的片段被整体重建
        assert_eq!(jobs[0].scheduled_segments.len(), 1);
        assert_eq!(jobs[0].scheduled_segments[0].date, ymd(2026, 1, 5));
        assert_eq!(result.jobs[0].scheduled_segments[0].date, monday);
    }
}
