// ==========================================
// 车间作业排程系统 - 排程操作接口
// ==========================================
// 职责: 会话内作业/设置状态的维护与分配触发
// 红线: 日程永远整体重算,不做增量修补
// 红线: 优化调用失败时会话状态保持最近一次已知良好分配
// ==========================================

use crate::api::dto::{JobDraft, MoveJobOutcome, OptimizeOutcome};
use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::ScheduleValidator;
use crate::config::capacity_profile::CapacityProfile;
use crate::domain::job::Job;
use crate::domain::settings::ScheduleSettings;
use crate::domain::types::DEFAULT_JOB_COLOR;
use crate::engine::allocator::{AllocationResult, HourAllocator};
use crate::engine::calendar::{next_weekday, parse_date_or_today, weekday_range};
use crate::optimizer::adapter::OptimizerAdapter;
use crate::optimizer::client::OptimizerClient;
use chrono::NaiveDate;
use tracing::{info, instrument};
use uuid::Uuid;

// ==========================================
// ScheduleApi - 排程操作接口
// ==========================================
// 会话内状态: 作业列表 + 排程设置 + 排程起始日期。
// 日程 (DayData) 不在此保存: 它是单次分配调用的输出。
pub struct ScheduleApi {
    jobs: Vec<Job>,
    settings: ScheduleSettings,
    planning_start: NaiveDate,

    allocator: HourAllocator,
    adapter: OptimizerAdapter,
    validator: ScheduleValidator,
}

impl ScheduleApi {
    /// 创建新的会话状态
    ///
    /// # 参数
    /// - `today`: 当前日期 (周末自动顺延为排程起始日期)
    pub fn new(today: NaiveDate) -> Self {
        Self {
            jobs: Vec::new(),
            settings: ScheduleSettings::default(),
            planning_start: next_weekday(today),
            allocator: HourAllocator::new(),
            adapter: OptimizerAdapter::new(),
            validator: ScheduleValidator::new(),
        }
    }

    // ==========================================
    // 状态访问
    // ==========================================

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn settings(&self) -> &ScheduleSettings {
        &self.settings
    }

    pub fn planning_start(&self) -> NaiveDate {
        self.planning_start
    }

    /// 日历窗口: 从排程起始日期起的 num_weekdays 个工作日
    ///
    /// 供日历视图确定渲染的列; 与分配结果无关。
    pub fn calendar_window(&self, num_weekdays: usize) -> Vec<NaiveDate> {
        weekday_range(self.planning_start, num_weekdays).collect()
    }

    // ==========================================
    // 作业维护
    // ==========================================

    /// 创建作业
    ///
    /// # 返回
    /// 新建的作业 (ID 由本层生成)
    pub fn create_job(&mut self, draft: &JobDraft) -> ApiResult<Job> {
        let preferred_start_date = self.validator.validate_job_draft(draft)?;

        let job = Job {
            id: Uuid::new_v4().to_string(),
            name: draft.name.trim().to_string(),
            required_hours: draft.required_hours,
            is_urgent: draft.is_urgent,
            preferred_start_date,
            activity_type: draft.activity_type,
            activity_detail: draft.activity_detail.clone(),
            quote_number: draft.quote_number.clone(),
            color: draft
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_JOB_COLOR.to_string()),
            scheduled_segments: Vec::new(),
        };

        info!(job_id = %job.id, job_name = %job.name, "创建作业");
        self.jobs.push(job.clone());
        Ok(job)
    }

    /// 编辑作业 (按表单整体更新输入字段,片段等待下次分配重建)
    pub fn update_job(&mut self, job_id: &str, draft: &JobDraft) -> ApiResult<Job> {
        let preferred_start_date = self.validator.validate_job_draft(draft)?;

        let job = self
            .jobs
            .iter_mut()
            .find(|job| job.id == job_id)
            .ok_or_else(|| ApiError::NotFound(format!("作业(id={})", job_id)))?;

        job.name = draft.name.trim().to_string();
        job.required_hours = draft.required_hours;
        job.is_urgent = draft.is_urgent;
        job.preferred_start_date = preferred_start_date;
        job.activity_type = draft.activity_type;
        job.activity_detail = draft.activity_detail.clone();
        job.quote_number = draft.quote_number.clone();
        if let Some(color) = &draft.color {
            job.color = color.clone();
        }

        Ok(job.clone())
    }

    /// 删除作业
    pub fn delete_job(&mut self, job_id: &str) -> ApiResult<()> {
        let before = self.jobs.len();
        self.jobs.retain(|job| job.id != job_id);
        if self.jobs.len() == before {
            return Err(ApiError::NotFound(format!("作业(id={})", job_id)));
        }
        Ok(())
    }

    /// 拖拽改期
    ///
    /// 将目标日期设为作业的期望开始日期; 周末目标顺延到下周一,
    /// 顺延情况在结果中标记,供界面提示。落位由下次分配重算。
    pub fn move_job(&mut self, job_id: &str, raw_target: &str) -> ApiResult<MoveJobOutcome> {
        let (target_date, snapped) = self.validator.validate_move_target(raw_target)?;

        let job = self
            .jobs
            .iter_mut()
            .find(|job| job.id == job_id)
            .ok_or_else(|| ApiError::NotFound(format!("作业(id={})", job_id)))?;

        job.preferred_start_date = Some(target_date);
        if snapped {
            info!(job_id = %job_id, target = %target_date, "拖拽目标落在周末,已顺延");
        }

        Ok(MoveJobOutcome {
            job_id: job_id.to_string(),
            target_date,
            snapped,
        })
    }

    // ==========================================
    // 设置维护
    // ==========================================

    /// 更新产能设置 (校验失败时现有设置保持不变)
    pub fn update_settings(&mut self, profile: &CapacityProfile) -> ApiResult<()> {
        self.settings = self.validator.validate_capacity_profile(profile)?;
        Ok(())
    }

    /// 设置排程起始日期
    ///
    /// 不可解析的输入回退到 today; 周末统一顺延。
    pub fn set_planning_start(&mut self, raw: &str, today: NaiveDate) {
        self.planning_start = parse_date_or_today(raw, today);
    }

    // ==========================================
    // 分配与优化
    // ==========================================

    /// 重新分配
    ///
    /// 对当前作业/设置/起始日期整体重算,并用结果替换
    /// 每个作业的排程片段。
    #[instrument(skip(self), fields(jobs_count = self.jobs.len()))]
    pub fn reallocate(&mut self) -> AllocationResult {
        let result = self
            .allocator
            .allocate(&self.jobs, &self.settings, self.planning_start);
        self.jobs = result.jobs.clone();
        result
    }

    /// 优化往返
    ///
    /// 流程: 构造请求 -> 调用远端 -> 按ID合并 -> 重新分配。
    /// 合并结果仅作为期望开始提示; 产能可行性由分配引擎裁决。
    /// 远端失败时直接返回错误,会话状态不变 (不合并部分状态)。
    ///
    /// 调用方负责在请求在途期间禁止并发提交。
    pub async fn optimize_schedule(
        &mut self,
        client: &dyn OptimizerClient,
        constraints_note: &str,
    ) -> ApiResult<OptimizeOutcome> {
        let request = self.adapter.build_request(
            &self.jobs,
            &self.settings,
            self.planning_start,
            constraints_note,
        );

        let response = client.optimize(&request).await?;

        self.jobs = self.adapter.merge_response(&self.jobs, &response);
        let result = self.reallocate();

        Ok(OptimizeOutcome {
            schedule: result.schedule,
            warnings: result.warnings,
            explanation: response.explanation,
        })
    }
}
