use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

// 课程表条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableSlot {
    pub id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    // 星期几：0 = 周一 … 6 = 周日
    pub weekday: i32,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub room: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl TimetableSlot {
    /// 判断两个条目是否冲突：同一天、时间段重叠，且共用班级或教师
    pub fn conflicts_with(&self, other: &TimetableSlot) -> bool {
        self.weekday == other.weekday
            && (self.class_id == other.class_id || self.teacher_id == other.teacher_id)
            && time_ranges_overlap(self.starts_at, self.ends_at, other.starts_at, other.ends_at)
    }
}

/// 半开区间重叠判断：首尾相接（a_end == b_start）不算重叠
pub fn time_ranges_overlap(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_overlapping_ranges() {
        assert!(time_ranges_overlap(t(8, 0), t(9, 0), t(8, 30), t(9, 30)));
        assert!(time_ranges_overlap(t(8, 30), t(9, 30), t(8, 0), t(9, 0)));
        // 完全包含
        assert!(time_ranges_overlap(t(8, 0), t(10, 0), t(8, 30), t(9, 0)));
    }

    #[test]
    fn test_touching_ranges_do_not_overlap() {
        assert!(!time_ranges_overlap(t(8, 0), t(9, 0), t(9, 0), t(10, 0)));
        assert!(!time_ranges_overlap(t(9, 0), t(10, 0), t(8, 0), t(9, 0)));
    }

    #[test]
    fn test_disjoint_ranges() {
        assert!(!time_ranges_overlap(t(8, 0), t(9, 0), t(10, 0), t(11, 0)));
    }

    fn slot(class_id: i64, teacher_id: i64, weekday: i32, start: NaiveTime) -> TimetableSlot {
        TimetableSlot {
            id: 0,
            class_id,
            subject_id: 1,
            teacher_id,
            weekday,
            starts_at: start,
            ends_at: start + chrono::Duration::hours(1),
            room: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_conflict_same_class() {
        let a = slot(1, 10, 0, t(8, 0));
        let b = slot(1, 11, 0, t(8, 30));
        assert!(a.conflicts_with(&b));
    }

    #[test]
    fn test_conflict_same_teacher_different_class() {
        let a = slot(1, 10, 2, t(8, 0));
        let b = slot(2, 10, 2, t(8, 30));
        assert!(a.conflicts_with(&b));
    }

    #[test]
    fn test_no_conflict_different_weekday() {
        let a = slot(1, 10, 0, t(8, 0));
        let b = slot(1, 10, 1, t(8, 0));
        assert!(!a.conflicts_with(&b));
    }

    #[test]
    fn test_no_conflict_unrelated_slots() {
        let a = slot(1, 10, 0, t(8, 0));
        let b = slot(2, 11, 0, t(8, 30));
        assert!(!a.conflicts_with(&b));
    }
}
