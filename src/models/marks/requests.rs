use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

// 登记成绩请求
#[derive(Debug, Deserialize)]
pub struct RecordMarkRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub assessment_type: String,
    pub grade: f64,
    pub assessment_date: chrono::NaiveDate, // ISO 8601 日期，如 "2025-11-20"
}

// 更新成绩请求（身份字段不可变更）
#[derive(Debug, Deserialize)]
pub struct UpdateMarkRequest {
    pub assessment_type: Option<String>,
    pub grade: Option<f64>,
    pub assessment_date: Option<chrono::NaiveDate>,
}

// 成绩查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct MarkListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub teacher_id: Option<i64>,
}

// 成绩列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct MarkListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub teacher_id: Option<i64>,
}
