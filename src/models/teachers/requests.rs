use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

// 创建教师请求
#[derive(Debug, Deserialize)]
pub struct CreateTeacherRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

// 更新教师请求
#[derive(Debug, Deserialize)]
pub struct UpdateTeacherRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

// 教师查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct TeacherQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct TeacherListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
