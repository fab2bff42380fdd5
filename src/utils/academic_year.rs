//! 学年窗口计算
//!
//! 成绩只能登记在"当前学年"内：窗口起点取当前自然年的开学日，
//! 终点取下一自然年的结业日（默认 9月1日 - 次年6月30日）。
//! 窗口始终锚定在调用时的自然年上，历史成绩不会把窗口拉回去。
//! 边界日期来自配置，判定本身是 (窗口, 日期) 的纯函数。

use chrono::{Datelike, NaiveDate};

use crate::config::AcademicYearConfig;
use crate::errors::{Result, SchoolSystemError};

/// 学年日期窗口（两端含）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcademicYearWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// 窗口校验失败的两种情形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowViolation {
    /// 日期早于窗口起点：学年尚未开始
    NotYetStarted,
    /// 日期晚于窗口终点：学年已经结束
    AlreadyEnded,
}

impl WindowViolation {
    pub fn message(&self) -> &'static str {
        match self {
            WindowViolation::NotYetStarted => "academic year has not started yet",
            WindowViolation::AlreadyEnded => "academic year has already ended",
        }
    }
}

impl AcademicYearWindow {
    /// 按参考日期（通常是"今天"）计算学年窗口
    ///
    /// 起点 = 参考日期所在自然年的 start_month/start_day，
    /// 终点 = 下一自然年的 end_month/end_day。
    pub fn for_date(reference: NaiveDate, config: &AcademicYearConfig) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(reference.year(), config.start_month, config.start_day)
            .ok_or_else(|| {
                SchoolSystemError::validation(format!(
                    "Invalid academic year start: {}-{:02}-{:02}",
                    reference.year(),
                    config.start_month,
                    config.start_day
                ))
            })?;
        let end = NaiveDate::from_ymd_opt(reference.year() + 1, config.end_month, config.end_day)
            .ok_or_else(|| {
                SchoolSystemError::validation(format!(
                    "Invalid academic year end: {}-{:02}-{:02}",
                    reference.year() + 1,
                    config.end_month,
                    config.end_day
                ))
            })?;
        Ok(Self { start, end })
    }

    /// 校验日期是否落在窗口内（两端含）
    pub fn check(&self, date: NaiveDate) -> std::result::Result<(), WindowViolation> {
        if date < self.start {
            return Err(WindowViolation::NotYetStarted);
        }
        if date > self.end {
            return Err(WindowViolation::AlreadyEnded);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> AcademicYearConfig {
        AcademicYearConfig {
            start_month: 9,
            start_day: 1,
            end_month: 6,
            end_day: 30,
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_window_anchored_to_reference_year() {
        let w = AcademicYearWindow::for_date(d(2025, 10, 10), &default_config()).unwrap();
        assert_eq!(w.start, d(2025, 9, 1));
        assert_eq!(w.end, d(2026, 6, 30));
    }

    #[test]
    fn test_window_shifts_with_reference_date() {
        // 窗口始终取参考日所在自然年：3 月的参考日产生的窗口
        // 起点在同年 9 月，此前的日期都会被判为"未开始"。
        let w = AcademicYearWindow::for_date(d(2026, 3, 15), &default_config()).unwrap();
        assert_eq!(w.start, d(2026, 9, 1));
        assert_eq!(w.end, d(2027, 6, 30));
        assert_eq!(w.check(d(2026, 3, 15)), Err(WindowViolation::NotYetStarted));
    }

    #[test]
    fn test_date_before_start_rejected() {
        let w = AcademicYearWindow::for_date(d(2025, 10, 10), &default_config()).unwrap();
        assert_eq!(w.check(d(2025, 8, 31)), Err(WindowViolation::NotYetStarted));
    }

    #[test]
    fn test_date_after_end_rejected() {
        let w = AcademicYearWindow::for_date(d(2025, 10, 10), &default_config()).unwrap();
        assert_eq!(w.check(d(2026, 7, 1)), Err(WindowViolation::AlreadyEnded));
    }

    #[test]
    fn test_boundaries_inclusive() {
        let w = AcademicYearWindow::for_date(d(2025, 10, 10), &default_config()).unwrap();
        assert_eq!(w.check(d(2025, 9, 1)), Ok(()));
        assert_eq!(w.check(d(2026, 6, 30)), Ok(()));
    }

    #[test]
    fn test_mid_window_date_accepted() {
        let w = AcademicYearWindow::for_date(d(2025, 12, 1), &default_config()).unwrap();
        assert_eq!(w.check(d(2025, 11, 20)), Ok(()));
    }

    #[test]
    fn test_custom_window_config() {
        let config = AcademicYearConfig {
            start_month: 2,
            start_day: 1,
            end_month: 12,
            end_day: 15,
        };
        let w = AcademicYearWindow::for_date(d(2025, 5, 1), &config).unwrap();
        assert_eq!(w.start, d(2025, 2, 1));
        assert_eq!(w.end, d(2026, 12, 15));
    }

    #[test]
    fn test_invalid_config_date_is_error() {
        // 2 月 30 日不存在
        let config = AcademicYearConfig {
            start_month: 2,
            start_day: 30,
            end_month: 6,
            end_day: 30,
        };
        assert!(AcademicYearWindow::for_date(d(2025, 5, 1), &config).is_err());
    }

    #[test]
    fn test_violation_messages() {
        assert_eq!(
            WindowViolation::NotYetStarted.message(),
            "academic year has not started yet"
        );
        assert_eq!(
            WindowViolation::AlreadyEnded.message(),
            "academic year has already ended"
        );
    }
}
