use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

// 创建班级请求
#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub academic_year: String,
    pub description: Option<String>,
}

// 更新班级请求
#[derive(Debug, Deserialize)]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub academic_year: Option<String>,
    pub description: Option<String>,
}

// 班级查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct ClassQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub academic_year: Option<String>,
}

// 班级列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct ClassListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub academic_year: Option<String>,
}

// 成绩单查询参数
#[derive(Debug, Deserialize)]
pub struct GradeSheetParams {
    pub subject_id: i64,
}
