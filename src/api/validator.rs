// ==========================================
// 车间作业排程系统 - 入口校验器
// ==========================================
// 职责: 入口层数据校验; 引擎假定输入已通过本层
// 红线: 产能覆写只接受工作日日期; 校验失败不进入核心
// ==========================================

use crate::api::dto::JobDraft;
use crate::api::error::{ApiError, ApiResult};
use crate::config::capacity_profile::CapacityProfile;
use crate::domain::settings::{CapacityOverride, ScheduleSettings};
use crate::engine::calendar::{is_weekday, next_weekday, DATE_FORMAT};
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::info;

// ==========================================
// ScheduleValidator - 入口校验器
// ==========================================
pub struct ScheduleValidator {
    // 无状态校验器,不需要注入依赖
}

impl ScheduleValidator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 作业录入校验
    // ==========================================

    /// 校验作业录入表单
    ///
    /// 规则:
    /// - 名称非空 (去除首尾空白后)
    /// - 所需工时有限且 > 0
    /// - 期望开始日期可解析; 周末日期顺延到下周一并记录提示
    ///
    /// # 返回
    /// - `Ok(Some(date))`: 解析并顺延后的期望开始日期
    /// - `Ok(None)`: 未填期望开始日期
    /// - `Err(ApiError)`: 校验失败
    pub fn validate_job_draft(&self, draft: &JobDraft) -> ApiResult<Option<NaiveDate>> {
        if draft.name.trim().is_empty() {
            return Err(ApiError::InvalidInput("作业名称不能为空".to_string()));
        }

        if !draft.required_hours.is_finite() || draft.required_hours <= 0.0 {
            return Err(ApiError::InvalidInput(format!(
                "所需工时必须为正数: {}",
                draft.required_hours
            )));
        }

        let Some(raw) = draft.preferred_start_date.as_deref() else {
            return Ok(None);
        };

        let date = self.parse_date(raw)?;
        let normalized = next_weekday(date);
        if normalized != date {
            info!(raw = %raw, normalized = %normalized, "期望开始日期落在周末,已顺延");
        }
        Ok(Some(normalized))
    }

    // ==========================================
    // 产能配置校验
    // ==========================================

    /// 校验产能配置并转换为排程设置
    ///
    /// 规则:
    /// - 五个工作日产能值有限且 >= 0
    /// - 覆写日期可解析且为工作日 (周末覆写无意义,直接拒绝)
    /// - 覆写产能有限且 >= 0; 日期不得重复
    ///
    /// # 返回
    /// 校验通过的排程设置 (覆写按日期升序)
    pub fn validate_capacity_profile(
        &self,
        profile: &CapacityProfile,
    ) -> ApiResult<ScheduleSettings> {
        let weekday_capacity = profile.daily_capacity.to_weekday_hours();
        for (index, hours) in weekday_capacity.iter().enumerate() {
            if !hours.is_finite() || *hours < 0.0 {
                return Err(ApiError::InvalidInput(format!(
                    "工作日产能必须为非负数: 第{}项为 {}",
                    index + 1,
                    hours
                )));
            }
        }

        let mut seen_dates: HashSet<NaiveDate> = HashSet::new();
        let mut overrides = Vec::with_capacity(profile.overrides.len());

        for entry in &profile.overrides {
            let date = self.parse_date(&entry.date)?;

            if !is_weekday(date) {
                return Err(ApiError::WeekendDate {
                    date: entry.date.clone(),
                    suggested: next_weekday(date).format(DATE_FORMAT).to_string(),
                });
            }

            if !entry.hours.is_finite() || entry.hours < 0.0 {
                return Err(ApiError::InvalidInput(format!(
                    "覆写产能必须为非负数: {} -> {}",
                    entry.date, entry.hours
                )));
            }

            if !seen_dates.insert(date) {
                return Err(ApiError::DuplicateOverrideDate(entry.date.clone()));
            }

            overrides.push(CapacityOverride {
                date,
                hours: entry.hours,
            });
        }

        overrides.sort_by_key(|o| o.date);

        Ok(ScheduleSettings {
            weekday_capacity,
            capacity_overrides: overrides,
        })
    }

    // ==========================================
    // 拖拽改期校验
    // ==========================================

    /// 校验拖拽目标日期
    ///
    /// 周末目标顺延到下周一,返回是否发生顺延 (供界面提示)。
    ///
    /// # 返回
    /// (生效日期, 是否顺延)
    pub fn validate_move_target(&self, raw: &str) -> ApiResult<(NaiveDate, bool)> {
        let date = self.parse_date(raw)?;
        let normalized = next_weekday(date);
        Ok((normalized, normalized != date))
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 解析 YYYY-MM-DD 日期字符串
    fn parse_date(&self, raw: &str) -> ApiResult<NaiveDate> {
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| ApiError::InvalidInput(format!("日期格式无效: {}", raw)))
    }
}

impl Default for ScheduleValidator {
    fn default() -> Self {
        Self::new()
    }
}
