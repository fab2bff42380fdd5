use crate::models::common::pagination::PaginationQuery;
use chrono::NaiveTime;
use serde::Deserialize;

// 创建课程表条目请求
#[derive(Debug, Deserialize)]
pub struct CreateTimetableSlotRequest {
    pub class_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub weekday: i32,        // 0 = 周一 … 6 = 周日
    pub starts_at: NaiveTime, // "08:30:00"
    pub ends_at: NaiveTime,
    pub room: Option<String>,
}

// 更新课程表条目请求
#[derive(Debug, Deserialize)]
pub struct UpdateTimetableSlotRequest {
    pub subject_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub weekday: Option<i32>,
    pub starts_at: Option<NaiveTime>,
    pub ends_at: Option<NaiveTime>,
    pub room: Option<String>,
}

// 课程表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct TimetableListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub weekday: Option<i32>,
}

// 课程表列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct TimetableListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub weekday: Option<i32>,
}
