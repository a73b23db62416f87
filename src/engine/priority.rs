// ==========================================
// 车间作业排程系统 - 作业排序引擎
// ==========================================
// 职责: 确定分配引擎的作业处理顺序
// 输入: 作业列表
// 输出: 排序后的作业列表 (优先级从高到低)
// 红线: 排序完全确定,相同输入必得相同顺序
// ==========================================

use crate::domain::job::Job;
use crate::engine::calendar::next_weekday;
use chrono::NaiveDate;
use std::cmp::Ordering;

// ==========================================
// JobPrioritizer - 作业排序引擎
// ==========================================
pub struct JobPrioritizer {
    // 无状态引擎,不需要注入依赖
}

impl JobPrioritizer {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 排序作业列表
    ///
    /// 排序键,依次比较直到出现非相等:
    /// 1) 加急作业优先
    /// 2) 有效期望开始日期升序 (周末顺延后比较; 有日期者优先于无日期者)
    /// 3) 作业ID升序 (ID 唯一,保证全序确定)
    ///
    /// # 参数
    /// - `jobs`: 待排序的作业列表 (取得所有权,调用方传入副本)
    ///
    /// # 返回
    /// 排序后的作业列表
    pub fn prioritize(&self, mut jobs: Vec<Job>) -> Vec<Job> {
        jobs.sort_by(|a, b| self.compare(a, b));
        jobs
    }

    /// 比较两个作业的优先级
    ///
    /// # 返回
    /// Ordering::Less 表示 a 优先于 b
    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        // 1. 加急优先
        match b.is_urgent.cmp(&a.is_urgent) {
            Ordering::Equal => {}
            other => return other,
        }

        // 2. 有效期望开始日期 (升序; 无日期排在有日期之后)
        match self.compare_effective_start(
            self.effective_preferred_date(a),
            self.effective_preferred_date(b),
        ) {
            Ordering::Equal => {}
            other => return other,
        }

        // 3. 作业ID升序 (最终决胜)
        a.id.cmp(&b.id)
    }

    /// 有效期望开始日期 (周末顺延到下周一)
    fn effective_preferred_date(&self, job: &Job) -> Option<NaiveDate> {
        job.preferred_start_date.map(next_weekday)
    }

    /// 比较有效期望开始日期
    ///
    /// # 返回
    /// - 两者都有日期: 日期升序
    /// - 仅一方有日期: 有日期者优先
    /// - 两者都无日期: 本级平手
    fn compare_effective_start(
        &self,
        a: Option<NaiveDate>,
        b: Option<NaiveDate>,
    ) -> Ordering {
        match (a, b) {
            (Some(date_a), Some(date_b)) => date_a.cmp(&date_b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl Default for JobPrioritizer {
    fn default() -> Self {
        Self::new()
    }
}
