// ==========================================
// 车间作业排程系统 - 优化负载适配器
// ==========================================
// 职责: 核心作业/设置模型与优化服务线格式之间的互译
// 输入: 作业列表 + 排程设置 / 优化服务响应
// 输出: 优化请求负载 / 按ID合并后的作业列表
// 红线: 合并在副本上整体完成,永不落下部分状态
// ==========================================

use crate::domain::job::{Job, ScheduledSegment};
use crate::domain::settings::ScheduleSettings;
use crate::engine::calendar::{is_weekday, next_weekday, DATE_FORMAT};
use crate::optimizer::dto::{
    OptimizerCapacityOverride, OptimizerCapacityPayload, OptimizerJobPayload,
    OptimizerJobResult, OptimizerRequest, OptimizerResponse, OptimizerSegment,
};
use chrono::NaiveDate;
use tracing::warn;

// ==========================================
// OptimizerAdapter - 优化负载适配器
// ==========================================
pub struct OptimizerAdapter {
    // 无状态引擎,不需要注入依赖
}

impl OptimizerAdapter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 出站: 构造请求
    // ==========================================

    /// 构造优化请求负载
    ///
    /// 序列化内容:
    /// - 每个作业的标识、工时、加急、类型元数据、当前片段、
    ///   期望开始日期 (顺延到工作日)
    /// - 产能配置 (工作日默认值 + 过滤掉周末日期的覆写)
    /// - 排程起始日期与自由文本约束描述
    ///
    /// # 参数
    /// - `jobs`: 当前作业列表
    /// - `settings`: 排程设置
    /// - `planning_date`: 排程起始日期
    /// - `constraints_note`: 自由文本约束描述
    pub fn build_request(
        &self,
        jobs: &[Job],
        settings: &ScheduleSettings,
        planning_date: NaiveDate,
        constraints_note: &str,
    ) -> OptimizerRequest {
        let job_payloads = jobs
            .iter()
            .map(|job| OptimizerJobPayload {
                id: job.id.clone(),
                name: job.name.clone(),
                required_hours: job.required_hours,
                is_urgent: job.is_urgent,
                activity_type: job.activity_type.to_string(),
                activity_detail: job.activity_detail.clone(),
                quote_number: job.quote_number.clone(),
                preferred_start_date: job
                    .preferred_start_date
                    .map(|date| format_date(next_weekday(date))),
                segments: job
                    .scheduled_segments
                    .iter()
                    .map(|segment| OptimizerSegment {
                        date: format_date(segment.date),
                        hours: segment.hours,
                    })
                    .collect(),
            })
            .collect();

        let overrides = settings
            .capacity_overrides
            .iter()
            .filter(|o| is_weekday(o.date))
            .map(|o| OptimizerCapacityOverride {
                date: format_date(o.date),
                hours: o.hours,
            })
            .collect();

        OptimizerRequest {
            jobs: job_payloads,
            capacity: OptimizerCapacityPayload {
                weekday_hours: settings.weekday_capacity,
                overrides,
            },
            planning_date: format_date(planning_date),
            constraints_note: constraints_note.to_string(),
        }
    }

    // ==========================================
    // 入站: 合并响应
    // ==========================================

    /// 将优化响应按ID合并进作业列表
    ///
    /// 合并规则:
    /// - 片段过滤到工作日日期后整体替换 scheduled_segments
    /// - preferred_start_date 取第一个保留片段的日期;
    ///   无片段时回退到远端建议日期 (顺延后); 再无则保持不变
    /// - 响应未提及的作业原样保留; 未知ID被忽略
    ///
    /// 合并结果只是期望开始提示,不是最终落位:
    /// 调用方随后重跑分配引擎,产能可行性仍由分配引擎裁决。
    ///
    /// # 参数
    /// - `jobs`: 当前作业列表 (不被修改)
    /// - `response`: 优化服务响应
    ///
    /// # 返回
    /// 合并后的新作业列表
    pub fn merge_response(&self, jobs: &[Job], response: &OptimizerResponse) -> Vec<Job> {
        let mut merged: Vec<Job> = jobs.to_vec();

        for result in &response.jobs {
            let Some(job) = merged.iter_mut().find(|job| job.id == result.id) else {
                warn!(job_id = %result.id, "优化响应包含未知作业ID,已忽略");
                continue;
            };

            job.scheduled_segments = self.weekday_segments(result);
            job.preferred_start_date = job
                .scheduled_segments
                .first()
                .map(|segment| segment.date)
                .or_else(|| {
                    result
                        .preferred_start_date
                        .as_deref()
                        .and_then(parse_date)
                        .map(next_weekday)
                })
                .or(job.preferred_start_date);
        }

        merged
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 解析并过滤单作业结果的片段 (仅保留工作日日期)
    fn weekday_segments(&self, result: &OptimizerJobResult) -> Vec<ScheduledSegment> {
        result
            .segments
            .iter()
            .filter_map(|segment| match parse_date(&segment.date) {
                Some(date) if is_weekday(date) => Some(ScheduledSegment {
                    date,
                    hours: segment.hours,
                }),
                Some(date) => {
                    warn!(job_id = %result.id, date = %date, "优化片段落在周末,已丢弃");
                    None
                }
                None => {
                    warn!(job_id = %result.id, raw = %segment.date, "优化片段日期不可解析,已丢弃");
                    None
                }
            })
            .collect()
    }
}

impl Default for OptimizerAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}
