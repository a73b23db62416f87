// ==========================================
// 车间作业排程系统 - 工作日日历工具
// ==========================================
// 职责: 工作日判定、周末顺延、工作日序列生成
// 红线: 周末 (周六/周日) 永远不是排程目标
// ==========================================

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::warn;

// 日期字符串线格式 (入口层统一使用)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 判断日期是否为工作日 (周一..周五)
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// 工作日下标 (周一=0 .. 周五=4)
///
/// # 返回
/// - `Some(idx)`: 工作日,可用于索引每周产能数组
/// - `None`: 周末
pub fn weekday_index(date: NaiveDate) -> Option<usize> {
    match date.weekday() {
        Weekday::Mon => Some(0),
        Weekday::Tue => Some(1),
        Weekday::Wed => Some(2),
        Weekday::Thu => Some(3),
        Weekday::Fri => Some(4),
        Weekday::Sat | Weekday::Sun => None,
    }
}

/// 周末顺延到下周一; 工作日原样返回
pub fn next_weekday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)).unwrap_or(date),
        Weekday::Sun => date.checked_add_days(Days::new(1)).unwrap_or(date),
        _ => date,
    }
}

/// 前进一个自然日 (可能落在周末,调用方在产能查询前需再次顺延)
pub fn step_to_next_calendar_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

/// 解析 YYYY-MM-DD 日期字符串
///
/// 不可解析的输入回退到 today,并记录警告; 结果统一顺延到工作日。
///
/// # 参数
/// - `raw`: 日期字符串
/// - `today`: 回退基准日期 (由调用方注入,保证可测试)
pub fn parse_date_or_today(raw: &str, today: NaiveDate) -> NaiveDate {
    let parsed = match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => date,
        Err(_) => {
            warn!(raw = %raw, fallback = %today, "日期解析失败,回退到今日");
            today
        }
    };
    next_weekday(parsed)
}

// ==========================================
// WeekdayRange - 工作日序列
// ==========================================
// 惰性、有限、可重启; 从 next_weekday(start) 起逐自然日推进,
// 仅产出工作日,直到产出 count 个日期为止
#[derive(Debug, Clone)]
pub struct WeekdayRange {
    current: NaiveDate,
    remaining: usize,
}

impl Iterator for WeekdayRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        let date = next_weekday(self.current);
        self.current = step_to_next_calendar_day(date);
        self.remaining -= 1;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for WeekdayRange {}

/// 生成恰好 count 个工作日的日期序列
///
/// # 参数
/// - `start`: 起始日期 (周末自动顺延)
/// - `count`: 产出的工作日数量
pub fn weekday_range(start: NaiveDate, count: usize) -> WeekdayRange {
    WeekdayRange {
        current: start,
        remaining: count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_weekday() {
        assert!(is_weekday(ymd(2026, 8, 3))); // 周一
        assert!(is_weekday(ymd(2026, 8, 7))); // 周五
        assert!(!is_weekday(ymd(2026, 8, 8))); // 周六
        assert!(!is_weekday(ymd(2026, 8, 9))); // 周日
    }

    #[test]
    fn test_weekday_index() {
        assert_eq!(weekday_index(ymd(2026, 8, 3)), Some(0));
        assert_eq!(weekday_index(ymd(2026, 8, 7)), Some(4));
        assert_eq!(weekday_index(ymd(2026, 8, 8)), None);
    }

    #[test]
    fn test_next_weekday_snaps_weekend_forward() {
        // 周六/周日 -> 下周一
        assert_eq!(next_weekday(ymd(2026, 8, 8)), ymd(2026, 8, 10));
        assert_eq!(next_weekday(ymd(2026, 8, 9)), ymd(2026, 8, 10));
        // 工作日原样返回
        assert_eq!(next_weekday(ymd(2026, 8, 5)), ymd(2026, 8, 5));
    }

    #[test]
    fn test_step_to_next_calendar_day_may_land_on_weekend() {
        assert_eq!(step_to_next_calendar_day(ymd(2026, 8, 7)), ymd(2026, 8, 8));
    }

    #[test]
    fn test_parse_date_or_today_valid() {
        let today = ymd(2026, 8, 3);
        assert_eq!(parse_date_or_today("2026-08-05", today), ymd(2026, 8, 5));
    }

    #[test]
    fn test_parse_date_or_today_weekend_input_snaps() {
        let today = ymd(2026, 8, 3);
        assert_eq!(parse_date_or_today("2026-08-08", today), ymd(2026, 8, 10));
    }

    #[test]
    fn test_parse_date_or_today_invalid_falls_back() {
        // 今日为周六时,回退结果也要顺延到周一
        let today = ymd(2026, 8, 8);
        assert_eq!(parse_date_or_today("not-a-date", today), ymd(2026, 8, 10));
        assert_eq!(parse_date_or_today("2026/08/05", today), ymd(2026, 8, 10));
    }

    #[test]
    fn test_weekday_range_emits_exact_count() {
        // 2026-08-06 是周四; 跨一个周末仍产出 5 个工作日
        let dates: Vec<NaiveDate> = weekday_range(ymd(2026, 8, 6), 5).collect();
        assert_eq!(
            dates,
            vec![
                ymd(2026, 8, 6),  // 周四
                ymd(2026, 8, 7),  // 周五
                ymd(2026, 8, 10), // 周一
                ymd(2026, 8, 11), // 周二
                ymd(2026, 8, 12), // 周三
            ]
        );
    }

    #[test]
    fn test_weekday_range_starts_from_normalized_start() {
        let dates: Vec<NaiveDate> = weekday_range(ymd(2026, 8, 8), 2).collect();
        assert_eq!(dates, vec![ymd(2026, 8, 10), ymd(2026, 8, 11)]);
    }

    #[test]
    fn test_weekday_range_is_restartable() {
        let range = weekday_range(ymd(2026, 8, 3), 3);
        let first: Vec<NaiveDate> = range.clone().collect();
        let second: Vec<NaiveDate> = range.collect();
        assert_eq!(first, second);
    }
}
