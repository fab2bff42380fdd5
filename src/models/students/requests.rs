use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

// 创建学生请求
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    pub enrollment_number: String,
    pub birth_date: Option<chrono::NaiveDate>, // ISO 8601 日期，如 "2010-05-17"
}

// 更新学生请求
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub enrollment_number: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
}

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct StudentQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
